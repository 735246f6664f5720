use core::fmt;

pub const TOKEN_NAME: &str = "Dram";
pub const TOKEN_SYMBOL: &str = "AMD";
pub const TOKEN_DECIMALS: u8 = 18;

/// Hard cap in smallest units: 10 000 whole tokens.
pub const TOTAL_SUPPLY: u128 = 10_000 * 10u128.pow(TOKEN_DECIMALS as u32);

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Sender balance below the amount being moved.
    InsufficientFunds,
    /// Holder balance below the amount being approved or burned.
    InsufficientBalance,
    InsufficientAllowance,
    /// Caller is not the minter, or the mintable pool is too small.
    CannotMint,
    NotAuthorisedToBurn,
    Overflow,
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InsufficientFunds,
    InsufficientAllowance,
    NotAuthorized,
    Overflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InsufficientFunds | Error::InsufficientBalance => ErrorKind::InsufficientFunds,
            Error::InsufficientAllowance => ErrorKind::InsufficientAllowance,
            Error::CannotMint | Error::NotAuthorisedToBurn => ErrorKind::NotAuthorized,
            Error::Overflow => ErrorKind::Overflow,
        }
    }

    /// Revert message reported to callers.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::InsufficientFunds => "Token: not enough funds",
            Error::InsufficientBalance => "Token: Not enough funds",
            Error::InsufficientAllowance => "Token: not enough allowance",
            Error::CannotMint => "Token: Can not mint",
            Error::NotAuthorisedToBurn => "Not authorised to burn",
            Error::Overflow => "Token: arithmetic overflow",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_constant_is_ten_thousand_tokens() {
        assert_eq!(TOTAL_SUPPLY, 10_000_000_000_000_000_000_000);
    }

    #[test]
    fn kinds_group_variants() {
        assert_eq!(Error::InsufficientBalance.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(Error::InsufficientFunds.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(Error::CannotMint.kind(), ErrorKind::NotAuthorized);
        assert_eq!(Error::NotAuthorisedToBurn.kind(), ErrorKind::NotAuthorized);
        assert_eq!(Error::InsufficientAllowance.kind(), ErrorKind::InsufficientAllowance);
    }

    #[test]
    fn display_uses_reason() {
        assert_eq!(format!("{}", Error::NotAuthorisedToBurn), "Not authorised to burn");
        assert_eq!(format!("{}", Error::InsufficientBalance), "Token: Not enough funds");
    }
}
