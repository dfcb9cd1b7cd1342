use thiserror::Error;

/// The largest chain the prefix tables can spell.
pub const MAX_CARBONS: u64 = 1000;

const BASE_PREFIXES: [&str; 10] = [
    "meth", "eth", "prop", "but", "pent", "hex", "hept", "oct", "non", "dec",
];

/// Multiples of ten, 10 through 90.
const TENS_PREFIXES: [&str; 9] = [
    "dec", "icos", "tricos", "tetracos", "pentacos", "hexacos", "heptacos", "octacos", "nonacos",
];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixError {
    #[error("A chain needs at least one carbon")]
    Zero,
    #[error("No prefix for a chain of {0} carbons (limit is {max})", max = MAX_CARBONS)]
    OutOfRange(u64),
}

/// Spells the chain-length prefix for `n` carbons, `1 <= n <= 1000`.
///
/// Hundreds are spelled as `<base>cent` followed by the prefix of the
/// remainder, so 1000 comes out as `deccent`.
pub fn try_generate_prefix(n: u64) -> Result<String, PrefixError> {
    match n {
        0 => Err(PrefixError::Zero),
        n if n > MAX_CARBONS => Err(PrefixError::OutOfRange(n)),
        n => Ok(spell(n as usize)),
    }
}

/// Infallible form of [`try_generate_prefix`] for callers that already checked the range.
/// Out-of-range counts yield an empty prefix.
pub fn generate_prefix(n: u64) -> String {
    try_generate_prefix(n).unwrap_or_default()
}

fn spell(n: usize) -> String {
    if n <= 10 {
        BASE_PREFIXES[n - 1].to_string()
    } else if n < 100 {
        let (tens, ones) = (n / 10, n % 10);
        let mut prefix = TENS_PREFIXES[tens - 1].to_string();
        if ones > 0 {
            prefix.push_str(BASE_PREFIXES[ones - 1]);
        }
        prefix
    } else {
        let (hundreds, remainder) = (n / 100, n % 100);
        let mut prefix = format!("{}cent", BASE_PREFIXES[hundreds - 1]);
        if remainder > 0 {
            prefix.push_str(&spell(remainder));
        }
        prefix
    }
}
