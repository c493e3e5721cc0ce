pub(crate) mod arrow_button;
