use super::{Freq, Hz, MHz, kHz};

impl core::ops::Mul<Hz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1e3 }
    }
}

impl core::ops::Mul<MHz> for f64 {
    type Output = Freq<f64>;

    fn mul(self, _rhs: MHz) -> Self::Output {
        Self::Output { freq: self * 1e6 }
    }
}
