//! Comma-separated id list parsing.

use super::record::ChoiceIds;
use crate::catalog::ComponentId;
use crate::core::ChoiceError;

/// Parse `"1, 2,3"` into component ids.
///
/// Whitespace around each token is ignored. Any token that is not a
/// non-negative integer rejects the whole input.
///
/// ```
/// use redteam_tabletop::choice::parse_choice;
///
/// let ids = parse_choice("3, 1,3").unwrap();
/// assert_eq!(ids.iter().map(|id| id.raw()).collect::<Vec<_>>(), vec![3, 1, 3]);
/// assert!(parse_choice("1,two").is_err());
/// ```
pub fn parse_choice(text: &str) -> Result<ChoiceIds, ChoiceError> {
    if text.trim().is_empty() {
        return Err(ChoiceError::Empty);
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .map(ComponentId::new)
                .map_err(|_| ChoiceError::Malformed(token.to_owned()))
        })
        .collect()
}
