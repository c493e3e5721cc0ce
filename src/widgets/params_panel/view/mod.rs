pub(crate) mod panel_form;
