//! Combinação de checksums de modelo e dataset.

/// Peso aplicado ao checksum do dataset.
pub const DATASET_WEIGHT: i64 = 13;

/// Peso aplicado ao checksum do modelo.
pub const MODEL_WEIGHT: i64 = 17;

/// Combina os checksums de um modelo e de um dataset em um único valor.
///
/// `dataset_checksum * 13 + model_checksum * 17`, com aritmética wrapping.
///
/// É uma combinação linear com perda: pares distintos podem colidir
/// (ex.: `(13, 0)` e `(0, 17)`). Serve apenas como dica de identidade.
/// A validade de um registro é decidida pelos campos de checksum
/// individuais, nunca por este valor.
pub fn combine(model_checksum: i64, dataset_checksum: i64) -> i64 {
    dataset_checksum
        .wrapping_mul(DATASET_WEIGHT)
        .wrapping_add(model_checksum.wrapping_mul(MODEL_WEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_formula() {
        assert_eq!(combine(100, 200), 200 * 13 + 100 * 17);
        assert_eq!(combine(0, 0), 0);
        assert_eq!(combine(-1, -1), -30);
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        assert_ne!(combine(1, 2), combine(2, 1));
    }

    #[test]
    fn test_combine_collides() {
        // 17 * 13 == 13 * 17
        assert_eq!(combine(13, 0), combine(0, 17));
    }

    #[test]
    fn test_combine_does_not_panic_on_overflow() {
        let _ = combine(i64::MAX, i64::MAX);
        let _ = combine(i64::MIN, i64::MIN);
    }
}
