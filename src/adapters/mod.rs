//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                    |
//! |------------|--------------|--------------------------------|
//! | `feedback` | FeedbackSink | DisplayPort (LCD), SignalPort  |
//! | `log_sink` | FeedbackSink | Serial log output              |

pub mod feedback;
pub mod log_sink;
