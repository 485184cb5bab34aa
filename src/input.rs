/// Parses one `length,quantity` entry.
pub fn parse_pair(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("invalid entry '{}', expected length,quantity", s));
    }
    let length = parts[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid length in '{}'", s))?;
    let qty = parts[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    Ok((length, qty))
}

/// Parses line-oriented `length,quantity` text, one pair per line.
/// Blank lines are skipped; any other malformed line is an error, so
/// bad input never reaches the packer.
pub fn parse_pairs(text: &str) -> Result<Vec<(u32, u32)>, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_pair)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("5000,2"), Ok((5000, 2)));
        assert_eq!(parse_pair(" 200 , 4 "), Ok((200, 4)));
    }

    #[test]
    fn test_parse_pair_rejects_malformed() {
        assert!(parse_pair("5000").is_err());
        assert!(parse_pair("5000,2,1").is_err());
        assert!(parse_pair("long,2").is_err());
        assert!(parse_pair("5000,many").is_err());
        assert!(parse_pair("-200,1").is_err());
        assert!(parse_pair("200,-1").is_err());
    }

    #[test]
    fn test_parse_pairs_keeps_line_order() {
        let pairs = parse_pairs("200,2\n150,4\n100,3").unwrap();
        assert_eq!(pairs, vec![(200, 2), (150, 4), (100, 3)]);
    }

    #[test]
    fn test_parse_pairs_skips_blank_lines() {
        let pairs = parse_pairs("5000,2\n\n  \n6000,3\n").unwrap();
        assert_eq!(pairs, vec![(5000, 2), (6000, 3)]);
    }

    #[test]
    fn test_parse_pairs_reports_bad_line() {
        let err = parse_pairs("5000,2\nnope\n6000,3").unwrap_err();
        assert!(err.contains("nope"));
    }
}
