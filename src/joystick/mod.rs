//! # Virtual Joystick Module
//!
//! Emits decoded control frames as OS input events through a uinput virtual
//! device.
//!
//! This module handles:
//! - Creating the virtual device with four absolute axes (0-2047 range)
//! - Mapping channels 1-4 to ABS_X / ABS_Y / ABS_Z / ABS_RZ
//! - Mapping the two switch bits to BTN_TRIGGER / BTN_THUMB
//! - Skipping emission while the receiver reports failsafe

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{
    AbsInfo, AbsoluteAxisType, AttributeSet, EventType, InputEvent, Key, UinputAbsSetup,
};
use tracing::{debug, warn};

use crate::error::{FportBridgeError, Result};
use crate::fport::parser::{FrameEvent, MessageSink};
use crate::fport::protocol::{
    ControlFrame, Message, CHANNEL_VALUE_CENTER, CHANNEL_VALUE_MAX, CHANNEL_VALUE_MIN,
};

/// Axes driven by the first four channels, in channel order
const AXES: [AbsoluteAxisType; 4] = [
    AbsoluteAxisType::ABS_X,
    AbsoluteAxisType::ABS_Y,
    AbsoluteAxisType::ABS_Z,
    AbsoluteAxisType::ABS_RZ,
];

/// Buttons driven by the two switch bits
const BUTTONS: [Key; 2] = [Key::BTN_TRIGGER, Key::BTN_THUMB];

/// Virtual input device fed by decoded control frames
pub struct VirtualJoystick {
    device: VirtualDevice,
}

impl VirtualJoystick {
    /// Create the uinput device
    ///
    /// # Errors
    ///
    /// Returns [`FportBridgeError::Joystick`] if uinput is unavailable
    /// (missing permissions on `/dev/uinput` is the usual cause).
    pub fn create(name: &str) -> Result<Self> {
        let abs = AbsInfo::new(
            i32::from(CHANNEL_VALUE_CENTER),
            i32::from(CHANNEL_VALUE_MIN),
            i32::from(CHANNEL_VALUE_MAX),
            0,
            0,
            1,
        );

        let mut keys = AttributeSet::<Key>::new();
        for button in BUTTONS {
            keys.insert(button);
        }

        let mut builder = VirtualDeviceBuilder::new()
            .map_err(|e| FportBridgeError::Joystick(format!("uinput unavailable: {}", e)))?
            .name(name)
            .with_keys(&keys)
            .map_err(|e| FportBridgeError::Joystick(format!("failed to add buttons: {}", e)))?;

        for axis in AXES {
            builder = builder
                .with_absolute_axis(&UinputAbsSetup::new(axis, abs))
                .map_err(|e| FportBridgeError::Joystick(format!("failed to add axis: {}", e)))?;
        }

        let device = builder
            .build()
            .map_err(|e| FportBridgeError::Joystick(format!("failed to build device: {}", e)))?;

        debug!("Created virtual joystick '{}'", name);
        Ok(Self { device })
    }

    /// Write one decoded control frame to the device
    ///
    /// Failsafe frames are dropped: the last good position is held rather
    /// than forwarding receiver-substituted values.
    pub fn apply(&mut self, frame: &ControlFrame) -> Result<()> {
        if frame.failsafe {
            debug!("Holding joystick state during failsafe");
            return Ok(());
        }

        let events = control_events(frame);
        self.device
            .emit(&events)
            .map_err(|e| FportBridgeError::Joystick(format!("failed to emit events: {}", e)))?;
        Ok(())
    }
}

impl MessageSink for VirtualJoystick {
    fn accept(&mut self, event: FrameEvent) {
        match event {
            Ok(Message::Control(frame)) => {
                if let Err(e) = self.apply(&frame) {
                    warn!("Joystick emission failed: {}", e);
                }
            }
            Ok(Message::Downlink(_)) => {} // not an input event
            Err(e) => debug!("Dropped frame: {}", e),
        }
    }
}

/// Translate a control frame into the input events to emit
///
/// Kept separate from the device so the mapping is testable without uinput.
pub fn control_events(frame: &ControlFrame) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(AXES.len() + BUTTONS.len());

    for (axis, &channel) in AXES.iter().zip(frame.channels.iter()) {
        events.push(InputEvent::new(
            EventType::ABSOLUTE,
            axis.0,
            i32::from(channel),
        ));
    }
    for (button, &pressed) in BUTTONS.iter().zip(frame.switches.iter()) {
        events.push(InputEvent::new(
            EventType::KEY,
            button.code(),
            i32::from(pressed),
        ));
    }

    events
}
