mod fields;
mod helpers;
mod mode;
