use super::{number, Rule};

pub(super) static RULES: &[Rule] = &[
    Rule::new("image_height", number(100.0)),
    Rule::new("image_height_sm", number(40.0)),
    Rule::new("image_opacity", number(1.0)),
];
