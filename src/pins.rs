//! GPIO / peripheral pin assignments for the growhouse controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// DHT11 temperature/humidity sensor — single-wire data line.
pub const DHT_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR photoresistor divider — ambient light level.
pub const LIGHT_ADC_GPIO: i32 = 27;
/// Capacitive soil-moisture probe — analog voltage output.
pub const SOIL_ADC_GPIO: i32 = 26;

/// ADC1 channel for the light sensor.
pub const ADC1_CH_LIGHT: u32 = 7;
/// ADC1 channel for the soil-moisture probe.
pub const ADC1_CH_SOIL: u32 = 9;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Water-pump relay — digital output, active HIGH.
pub const RELAY_GPIO: i32 = 2;

/// RGB status light — one digital output per channel (on/off, no PWM).
pub const LED_R_GPIO: i32 = 17;
pub const LED_G_GPIO: i32 = 18;
pub const LED_B_GPIO: i32 = 19;
