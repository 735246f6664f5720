#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod model;

pub use model::{Error, ErrorKind, Result, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY};

#[ink::contract]
mod dram {
    use crate::model::{Error, Result, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY};
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    /// Balance moved between holders. `from_acc` is `None` for the
    /// issuance at construction.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from_acc: Option<AccountId>,
        #[ink(topic)]
        to_acc: Option<AccountId>,
        amount: Balance,
    }

    /// Carries the amount added to the allowance, not the new total.
    #[ink(event)]
    pub struct Approve {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Mint {
        amount: Balance,
    }

    #[ink(event)]
    pub struct Burn {
        amount: Balance,
    }

    #[ink(storage)]
    pub struct Dram {
        total_supply: Balance,
        /// Unissued part of `total_supply`, only ever reduced by `mint`.
        mintable_supply: Balance,
        initial_supply: Balance,
        minter_acc: AccountId,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    impl Dram {
        #[ink(constructor)]
        pub fn new() -> Self {
            Self::with_total_supply(TOTAL_SUPPLY)
        }

        /// Half of `total` goes to the deployer, the rest is the mintable pool.
        #[ink(constructor)]
        pub fn with_total_supply(total: Balance) -> Self {
            let minter_acc = Self::env().caller();
            let initial_supply = total / 2;
            let mintable_supply = total - initial_supply;

            let mut balances = Mapping::default();
            balances.insert(&minter_acc, &initial_supply);

            Self::env().emit_event(Transfer {
                from_acc: None,
                to_acc: Some(minter_acc),
                amount: initial_supply,
            });
            ink::env::debug_println!(
                "dram: issued {} to {:?}, {} mintable",
                initial_supply,
                minter_acc,
                mintable_supply
            );

            Self {
                total_supply: total,
                mintable_supply,
                initial_supply,
                minter_acc,
                balances,
                allowances: Mapping::default(),
            }
        }

        // ---- metadata / supply ----

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn mintable_supply(&self) -> Balance {
            self.mintable_supply
        }

        #[ink(message)]
        pub fn initial_supply(&self) -> Balance {
            self.initial_supply
        }

        #[ink(message)]
        pub fn minter(&self) -> AccountId {
            self.minter_acc
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        // ---- holder operations ----

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        /// Adds `amount` to the caller's allowance for `spender_acc`.
        ///
        /// Rejected when `amount` exceeds what the caller holds right now.
        /// Later balance changes do not shrink an existing allowance.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            if amount > self.balance_of(owner_acc) {
                return Err(Error::InsufficientBalance)
            }
            let new_allow = self
                .allowance(owner_acc, spender_acc)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            self.allowances.insert(&(owner_acc, spender_acc), &new_allow);

            self.env().emit_event(Approve { owner_acc, spender_acc, amount });
            Ok(())
        }

        /// Moves `amount` from `owner_acc` to `to_acc` against the caller's
        /// allowance. The allowance is checked before the owner's balance.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            owner_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            let new_allow = self
                .allowance(owner_acc, spender_acc)
                .checked_sub(amount)
                .ok_or(Error::InsufficientAllowance)?;

            self.move_balance(owner_acc, to_acc, amount)?;
            self.allowances.insert(&(owner_acc, spender_acc), &new_allow);
            Ok(())
        }

        // ---- minter operations ----

        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            if caller_acc != self.minter_acc {
                ink::env::debug_println!("dram: mint rejected for {:?}", caller_acc);
                return Err(Error::CannotMint)
            }
            let new_mintable = self
                .mintable_supply
                .checked_sub(amount)
                .ok_or(Error::CannotMint)?;
            let new_to = self
                .balance_of(to_acc)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;

            self.mintable_supply = new_mintable;
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Mint { amount });
            ink::env::debug_println!("dram: minted {} to {:?}, {} left", amount, to_acc, new_mintable);
            Ok(())
        }

        /// Destroys `amount` held by `from_acc`. The burned amount is not
        /// returned to the mintable pool and `total_supply` stays as is.
        #[ink(message)]
        pub fn burn(&mut self, from_acc: AccountId, amount: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            if caller_acc != self.minter_acc {
                ink::env::debug_println!("dram: burn rejected for {:?}", caller_acc);
                return Err(Error::NotAuthorisedToBurn)
            }
            let new_from = self
                .balance_of(from_acc)
                .checked_sub(amount)
                .ok_or(Error::InsufficientBalance)?;
            self.balances.insert(&from_acc, &new_from);

            self.env().emit_event(Burn { amount });
            ink::env::debug_println!("dram: burned {} from {:?}", amount, from_acc);
            Ok(())
        }

        // ---- internals ----

        /// All checks run before the first write.
        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            let new_from = self
                .balance_of(from_acc)
                .checked_sub(amount)
                .ok_or(Error::InsufficientFunds)?;
            if from_acc != to_acc {
                let new_to = self
                    .balance_of(to_acc)
                    .checked_add(amount)
                    .ok_or(Error::Overflow)?;
                self.balances.insert(&from_acc, &new_from);
                self.balances.insert(&to_acc, &new_to);
            }

            self.env().emit_event(Transfer {
                from_acc: Some(from_acc),
                to_acc: Some(to_acc),
                amount,
            });
            Ok(())
        }
    }


}
