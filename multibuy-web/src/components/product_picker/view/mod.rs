pub(super) mod option_box;
pub(super) mod summary;
