pub(crate) mod balance;
pub(crate) mod generate;
