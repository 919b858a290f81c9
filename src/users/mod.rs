pub(crate) mod alias;
pub(crate) mod class;
pub(crate) mod delete;
pub(crate) mod lookup;
pub(crate) mod register;
