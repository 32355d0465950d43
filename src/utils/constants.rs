pub const GRAVITY: f64 = 9.80665; // m/s^2
