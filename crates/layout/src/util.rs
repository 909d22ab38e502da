/// Points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimetres to PDF points.
pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}
