const COUNTRY_CODE: &str = "351";
const MAX_DIGITS: usize = 12; // country code + 9 subscriber digits

/// Reformats whatever is in the WhatsApp input into `+351 9XX XXX XXX`,
/// progressively, so partial input stays readable while typing.
pub fn format_whatsapp(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !digits.is_empty() && !digits.starts_with(COUNTRY_CODE) {
        digits.insert_str(0, COUNTRY_CODE);
    }
    digits.truncate(MAX_DIGITS);

    if digits.len() <= COUNTRY_CODE.len() {
        return digits;
    }

    // Only ASCII digits are left, so byte chunks are char chunks.
    let groups: Vec<&str> = digits
        .as_bytes()
        .chunks(3)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    format!("+{}", groups.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_number_gets_country_code() {
        assert_eq!(format_whatsapp("912345678"), "+351 912 345 678");
    }

    #[test]
    fn existing_country_code_is_not_doubled() {
        assert_eq!(format_whatsapp("351912345678"), "+351 912 345 678");
        assert_eq!(format_whatsapp("+351 912 345 678"), "+351 912 345 678");
    }

    #[test]
    fn formats_progressively_while_typing() {
        let typed = "912345678";
        let mut field = String::new();
        let mut seen = Vec::new();
        for c in typed.chars() {
            field.push(c);
            field = format_whatsapp(&field);
            seen.push(field.clone());
        }
        assert_eq!(seen[0], "+351 9");
        assert_eq!(seen[2], "+351 912");
        assert_eq!(seen[3], "+351 912 3");
        assert_eq!(seen.last().unwrap(), "+351 912 345 678");
    }

    #[test]
    fn extra_digits_are_dropped() {
        assert_eq!(format_whatsapp("91234567899"), "+351 912 345 678");
    }

    #[test]
    fn short_and_empty_input() {
        assert_eq!(format_whatsapp(""), "");
        assert_eq!(format_whatsapp("abc"), "");
        assert_eq!(format_whatsapp("35"), "+351 35");
        assert_eq!(format_whatsapp("351"), "351");
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(format_whatsapp("(91) 234-5678"), "+351 912 345 678");
    }
}
