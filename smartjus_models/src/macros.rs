/// Declares a non-sensitive string newtype backed by [`nutype`].
macro_rules! nutype_string {
    ($(#[$meta:meta])* $ident:ident $(($($args:tt)*))?) => {
        $(#[$meta])*
        #[::nutype::nutype(
            $($($args)*,)?
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
