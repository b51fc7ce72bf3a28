mod option;
mod pwm;
mod reset;
mod spi;
