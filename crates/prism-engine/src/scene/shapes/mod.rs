pub(crate) mod line;
