//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements              | Connects to              |
//! |------------|-------------------------|--------------------------|
//! | `hardware` | SensorPort              | ESP32 ADC, GPIO          |
//! |            | ActuatorPort            | relay + RGB GPIO         |
//! | `http`     | RemotePort              | growhouse HTTP server    |
//! | `log_sink` | EventSink               | Serial log output        |
//! | `time`     | (monotonic clock)       | ESP32 system timer       |
//! | `wifi`     | (station connectivity)  | ESP-IDF WiFi STA         |

pub mod hardware;
pub mod http;
pub mod log_sink;
pub mod time;
pub mod wifi;
