//! # Record Types
//!
//! Every record identifier and its declared on-chain length.

use crate::domain::errors::RecordError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Declared length of a record payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLength {
    /// Null-padded UTF-8 string of any length.
    Variable,
    /// Raw binary of exactly this many bytes.
    Fixed(usize),
}

macro_rules! record_types {
    ($($variant:ident => $id:literal, $len:expr;)+) => {
        /// A record identifier.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
        )]
        pub enum RecordType {
            $($variant,)+
        }

        impl RecordType {
            /// Every record type, in declaration order.
            pub const ALL: &'static [RecordType] = &[$(RecordType::$variant,)+];

            /// On-chain identifier, used as the record label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RecordType::$variant => $id,)+
                }
            }

            /// Declared payload length.
            pub fn length(&self) -> RecordLength {
                match self {
                    $(RecordType::$variant => $len,)+
                }
            }
        }

        impl FromStr for RecordType {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(RecordType::$variant),)+
                    other => Err(RecordError::UnknownRecordType(other.to_string())),
                }
            }
        }
    };
}

record_types! {
    Ipfs => "IPFS", RecordLength::Variable;
    Arwv => "ARWV", RecordLength::Variable;
    Sol => "SOL", RecordLength::Fixed(96);
    Eth => "ETH", RecordLength::Fixed(20);
    Btc => "BTC", RecordLength::Variable;
    Ltc => "LTC", RecordLength::Variable;
    Doge => "DOGE", RecordLength::Variable;
    Email => "email", RecordLength::Variable;
    Url => "url", RecordLength::Variable;
    Discord => "discord", RecordLength::Variable;
    Github => "github", RecordLength::Variable;
    Reddit => "reddit", RecordLength::Variable;
    Twitter => "twitter", RecordLength::Variable;
    Telegram => "telegram", RecordLength::Variable;
    Pic => "pic", RecordLength::Variable;
    Shdw => "SHDW", RecordLength::Variable;
    Point => "POINT", RecordLength::Variable;
    Bsc => "BSC", RecordLength::Fixed(20);
    Injective => "INJ", RecordLength::Fixed(20);
    Backpack => "backpack", RecordLength::Variable;
    A => "A", RecordLength::Fixed(4);
    AAAA => "AAAA", RecordLength::Fixed(16);
    Cname => "CNAME", RecordLength::Variable;
    Txt => "TXT", RecordLength::Variable;
    Background => "background", RecordLength::Fixed(32);
    Base => "BASE", RecordLength::Variable;
}

impl RecordType {
    /// Fixed length, or `None` for variable-length types.
    pub fn fixed_len(&self) -> Option<usize> {
        match self.length() {
            RecordLength::Fixed(len) => Some(len),
            RecordLength::Variable => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
