use rand::Rng;

/// Devuelve una copia de `items` en orden aleatorio uniforme (Fisher–Yates).
/// El original no se toca; con 0 o 1 elementos la copia sale tal cual.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = rand::thread_rng();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn shuffle_preserves_elements_and_length() {
        let input: Vec<u32> = (0..50).collect();
        let out = shuffle(&input);
        assert_eq!(out.len(), input.len());
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, input);
        // el original queda intacto
        assert_eq!(input, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_empty_and_singleton() {
        let empty: Vec<u32> = vec![];
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[7u32]), vec![7]);
    }

    #[test]
    fn shuffle_is_roughly_uniform_over_three_elements() {
        // 6 permutaciones posibles; con 6000 tiradas cada una debería
        // salir ~1000 veces. Toleramos bastante margen.
        let trials = 6000;
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffle(&[1u8, 2, 3])).or_default() += 1;
        }
        assert_eq!(counts.len(), 6, "deben aparecer las 6 permutaciones");
        for (perm, n) in &counts {
            assert!(
                *n > trials / 12 && *n < trials / 3,
                "permutación {perm:?} apareció {n} veces de {trials}"
            );
        }
    }
}
