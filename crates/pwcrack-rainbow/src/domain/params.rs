//! Table construction parameters

use crate::constants::{
    DEFAULT_CHAIN_LENGTH, DEFAULT_NUM_CHAINS, DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH,
};
use crate::domain::alphabet::password_space;
use crate::error::ConfigError;

/// Validated parameters of a rainbow table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableParams {
    /// Characters per password
    pub password_length: usize,
    /// Hash → reduce steps per chain
    pub chain_length: u32,
    /// Number of chains in the table
    pub num_chains: u64,
}

impl TableParams {
    /// Validate and create parameters
    ///
    /// Every start password must be distinct, so the table cannot hold more
    /// chains than there are passwords of the given length.
    pub fn new(
        password_length: usize,
        chain_length: u32,
        num_chains: u64,
    ) -> Result<Self, ConfigError> {
        if password_length == 0 || password_length > MAX_PASSWORD_LENGTH {
            return Err(ConfigError::PasswordLength {
                found: password_length,
                max: MAX_PASSWORD_LENGTH,
            });
        }
        if chain_length == 0 {
            return Err(ConfigError::ChainLength);
        }
        if num_chains == 0 {
            return Err(ConfigError::ChainCount);
        }

        let space = password_space(password_length).unwrap_or(u128::MAX);
        if num_chains as u128 > space {
            return Err(ConfigError::TableTooLarge {
                requested: num_chains,
                space,
            });
        }

        Ok(Self {
            password_length,
            chain_length,
            num_chains,
        })
    }

    /// Size of the password space (36^password_length)
    pub fn password_space(&self) -> u128 {
        password_space(self.password_length).unwrap_or(u128::MAX)
    }
}

impl Default for TableParams {
    /// Password length 7, chain length 2,000, 2,000 chains
    fn default() -> Self {
        Self {
            password_length: DEFAULT_PASSWORD_LENGTH,
            chain_length: DEFAULT_CHAIN_LENGTH,
            num_chains: DEFAULT_NUM_CHAINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_valid() {
        let params = TableParams::new(2, 3, 4).unwrap();
        assert_eq!(params.password_length, 2);
        assert_eq!(params.chain_length, 3);
        assert_eq!(params.num_chains, 4);
        assert_eq!(params.password_space(), 1296);
    }

    #[test]
    fn test_params_default_is_valid() {
        let default = TableParams::default();
        let validated = TableParams::new(
            default.password_length,
            default.chain_length,
            default.num_chains,
        );
        assert_eq!(validated, Ok(default));
    }

    #[test]
    fn test_params_zero_values() {
        assert!(matches!(
            TableParams::new(0, 3, 4),
            Err(ConfigError::PasswordLength { found: 0, .. })
        ));
        assert_eq!(TableParams::new(2, 0, 4), Err(ConfigError::ChainLength));
        assert_eq!(TableParams::new(2, 3, 0), Err(ConfigError::ChainCount));
    }

    #[test]
    fn test_params_password_too_long() {
        assert!(matches!(
            TableParams::new(MAX_PASSWORD_LENGTH + 1, 3, 4),
            Err(ConfigError::PasswordLength { .. })
        ));
        assert!(TableParams::new(MAX_PASSWORD_LENGTH, 3, 4).is_ok());
    }

    #[test]
    fn test_params_table_exceeds_space() {
        assert!(TableParams::new(2, 3, 1296).is_ok());
        assert_eq!(
            TableParams::new(2, 3, 1297),
            Err(ConfigError::TableTooLarge {
                requested: 1297,
                space: 1296
            })
        );
    }
}
