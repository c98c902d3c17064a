/// Приводит дату вида `D/M/YYYY` к `YYYY-M-D`.
///
/// Считаем, что день идёт первым: при дне > 12 порядок M/D невозможен,
/// а для дня <= 12 надёжно различить варианты нельзя. Части не дополняются
/// нулями. Строки другого вида возвращаются без изменений.
pub fn normalize_date(date: &str) -> String {
    let bytes = date.as_bytes();
    if bytes.len() >= 8 && (bytes[1] == b'/' || bytes[2] == b'/') {
        let parts: Vec<&str> = date.splitn(3, '/').collect();
        if let [day, month, year] = parts.as_slice() {
            return format!("{}-{}-{}", year, month, day);
        }
    }
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_without_padding() {
        assert_eq!(normalize_date("5/6/2020"), "2020-6-5");
        assert_eq!(normalize_date("1/2/2021"), "2021-2-1");
    }

    #[test]
    fn test_two_digit_day_and_month() {
        assert_eq!(normalize_date("25/12/2019"), "2019-12-25");
        assert_eq!(normalize_date("05/06/2020"), "2020-06-05");
    }

    #[test]
    fn test_iso_date_passes_through() {
        assert_eq!(normalize_date("2020-06-05"), "2020-06-05");
    }

    #[test]
    fn test_short_string_passes_through() {
        assert_eq!(normalize_date("5/6/20"), "5/6/20");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_slash_in_wrong_position_passes_through() {
        assert_eq!(normalize_date("2020/06/05"), "2020/06/05");
    }

    #[test]
    fn test_only_two_parts_passes_through() {
        assert_eq!(normalize_date("1/2345678"), "1/2345678");
    }
}
