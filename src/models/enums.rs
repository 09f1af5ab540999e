use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(InvoiceStatus {
    Pending => "pending",
    Paid => "paid",
    Overdue => "overdue",
});

// Dosing schedule vocabulary offered by the prescription form. The stored
// string is the human-readable label, which also prints on the PDF.
str_enum!(Frequency {
    OnceDaily => "Once daily",
    TwiceDaily => "Twice daily",
    ThreeTimesDaily => "Three times daily",
    FourTimesDaily => "Four times daily",
    Every8Hours => "Every 8 hours",
    Every12Hours => "Every 12 hours",
    AsNeeded => "As needed",
});

str_enum!(DateRange {
    All => "all",
    Today => "today",
    Week => "week",
    Month => "month",
});

str_enum!(ThemeMode {
    Light => "light",
    Dark => "dark",
    System => "system",
});
