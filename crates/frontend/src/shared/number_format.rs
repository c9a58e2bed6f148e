//! Форматирование размеров файлов и оценок риска для UI

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Человекочитаемый размер файла
///
/// # Примеры
///
/// ```
/// use legal_analyzer_web::shared::number_format::format_bytes;
/// assert_eq!(format_bytes(1023), "1023 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Оценка риска без лишнего нуля после запятой: `8` → "8", `7.26` → "7.3"
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_boundaries() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1_048_575), "1024.0 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(5 * 1_048_576 + 524_288), "5.5 MB");
    }

    #[test]
    fn test_format_bytes_is_monotonic() {
        let to_bytes = |s: &str| -> f64 {
            let (value, unit) = s.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            match unit {
                "B" => value,
                "KB" => value * 1024.0,
                "MB" => value * 1024.0 * 1024.0,
                other => panic!("unexpected unit {other}"),
            }
        };

        let samples = [0u64, 1, 512, 1023, 1024, 1100, 10_240, 1_048_575, 1_048_576, 3_000_000];
        let rendered: Vec<f64> = samples.iter().map(|b| to_bytes(&format_bytes(*b))).collect();
        for pair in rendered.windows(2) {
            assert!(pair[0] <= pair[1], "{:?} is not monotonic", rendered);
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(8.0), "8");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(7.26), "7.3");
        assert_eq!(format_score(6.5), "6.5");
    }
}
