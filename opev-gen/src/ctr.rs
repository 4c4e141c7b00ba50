//! Counter-mask rendering
//!
//! The generated table encodes which hardware counters an event may be
//! assigned to as a bitwise OR of `CTR(n)` macro invocations; the consuming
//! profiler control code defines `CTR(n)` as `(1 << n)`.

use crate::types::{GenError, Result};

/// Render a comma-separated counter index list as a C bitmask expression.
///
/// `"0,1"` becomes `CTR(0) | CTR(1)`; a single index produces a lone
/// `CTR(x)` with no separator. Input order is preserved and tokens are not
/// numerically validated. An empty list, or an empty token within the list,
/// has no valid rendering and is rejected.
pub fn counter_mask(list: &str) -> Result<String> {
    let mut terms = Vec::new();
    for token in list.split(',') {
        if token.is_empty() {
            return Err(GenError::InvalidCounterList(list.to_string()));
        }
        terms.push(format!("CTR({})", token));
    }
    Ok(terms.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_counter() {
        assert_eq!(counter_mask("0").unwrap(), "CTR(0)");
    }

    #[test]
    fn test_two_counters() {
        assert_eq!(counter_mask("0,1").unwrap(), "CTR(0) | CTR(1)");
    }

    #[test]
    fn test_three_counters() {
        assert_eq!(counter_mask("0,1,2").unwrap(), "CTR(0) | CTR(1) | CTR(2)");
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(counter_mask("3,0").unwrap(), "CTR(3) | CTR(0)");
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            counter_mask(""),
            Err(GenError::InvalidCounterList(_))
        ));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            counter_mask("0,,1"),
            Err(GenError::InvalidCounterList(_))
        ));
        assert!(matches!(
            counter_mask("0,"),
            Err(GenError::InvalidCounterList(_))
        ));
    }
}
