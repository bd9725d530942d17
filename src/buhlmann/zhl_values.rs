/// Nitrogen half-life in minutes
pub type ZHLParam = f64;

/// Compartment half-lives of the original 1990 ZH-L16A table. Compartment 1
/// is subdivided into 1a and 1b (4 and 5 min); some sources treat them as
/// either/or, keeping both adds conservatism. The `a` and `b` tolerance
/// coefficients are derived from these at construction.
pub const ZHL_16A_HALF_LIVES: [ZHLParam; 17] = [
    4., 5., 8., 12.5, 18.5, 27., 38.3, 54.3, 77., 109., 146., 187., 239., 305., 390., 498., 635.,
];
