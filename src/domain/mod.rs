// Domain layer: the bottle value object and how it describes itself. No dependencies beyond std.

pub mod bottle;
pub mod locale;
