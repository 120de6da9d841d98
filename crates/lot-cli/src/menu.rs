//! Main menu text and choice parsing.

/// Printed before every prompt for a choice.
pub const MENU: &str = "\n1. Display Parking Lot\n2. Park a Car\n3. Leave Parking\n0. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Park,
    Leave,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Interpret one input token. Anything that is not a listed number is `Invalid`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(1) => Self::Display,
            Ok(2) => Self::Park,
            Ok(3) => Self::Leave,
            Ok(0) => Self::Exit,
            Ok(_) | Err(_) => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::MenuChoice;

    #[rstest]
    #[case("1", MenuChoice::Display)]
    #[case("2", MenuChoice::Park)]
    #[case("3", MenuChoice::Leave)]
    #[case("0", MenuChoice::Exit)]
    #[case("+2", MenuChoice::Park)]
    #[case("-0", MenuChoice::Exit)]
    #[case("4", MenuChoice::Invalid)]
    #[case("-1", MenuChoice::Invalid)]
    #[case("abc", MenuChoice::Invalid)]
    #[case("2abc", MenuChoice::Invalid)]
    #[case("1.0", MenuChoice::Invalid)]
    #[case("99999999999999999999999", MenuChoice::Invalid)]
    fn parses_tokens(#[case] token: &str, #[case] expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(token), expected);
    }
}
