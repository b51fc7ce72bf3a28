mod float;
mod int;

/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// \[MHz\]
pub struct MHz;

/// Frequency
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Freq<T: Copy> {
    pub(crate) freq: T,
}

impl<T: Copy> core::fmt::Debug for Freq<T>
where
    T: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.freq)
    }
}

impl<T: Copy> Freq<T> {
    #[inline]
    /// Returns the frequency in Hz.
    pub const fn hz(&self) -> T {
        self.freq
    }
}

impl Freq<u32> {
    /// Converts to a floating point frequency.
    #[must_use]
    pub fn as_f64(&self) -> Freq<f64> {
        Freq {
            freq: self.freq as f64,
        }
    }
}

impl<T, U> core::ops::Mul<U> for Freq<T>
where
    T: core::ops::Mul<U, Output = T> + Copy,
{
    type Output = Freq<T>;

    fn mul(self, rhs: U) -> Self::Output {
        Freq {
            freq: self.freq * rhs,
        }
    }
}

impl<T, U> core::ops::Div<U> for Freq<T>
where
    T: core::ops::Div<U, Output = T> + Copy,
{
    type Output = Freq<T>;

    fn div(self, rhs: U) -> Self::Output {
        Freq {
            freq: self.freq / rhs,
        }
    }
}
