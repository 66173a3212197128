#![no_std]

pub mod buzzer;
pub mod nixie_tubes;
pub mod soft_rtc;
pub mod thermometer;
pub mod time_source;
