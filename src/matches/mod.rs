pub(crate) mod delete;
pub(crate) mod format;
pub(crate) mod lookup;
pub(crate) mod parse;
pub(crate) mod record;
