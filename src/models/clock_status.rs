use std::fmt;

/// Where a user stands for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    Out,
    In,
    Break,
}

impl ClockStatus {
    /// Label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            ClockStatus::Out => "Clocked Out",
            ClockStatus::In => "Clocked In",
            ClockStatus::Break => "On Break",
        }
    }

    /// Actions a user may take from this status, in dashboard order.
    pub fn available_actions(&self) -> &'static [ClockAction] {
        match self {
            ClockStatus::Out => &[ClockAction::ClockIn],
            ClockStatus::In => &[ClockAction::StartBreak, ClockAction::ClockOut],
            ClockStatus::Break => &[ClockAction::EndBreak, ClockAction::ClockOut],
        }
    }
}

impl fmt::Display for ClockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClockStatus::Out => "clocked out",
            ClockStatus::In => "clocked in",
            ClockStatus::Break => "on break",
        };
        f.write_str(s)
    }
}

/// Events that drive the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    StartBreak,
    EndBreak,
    ClockOut,
}

impl ClockAction {
    /// Operation name used in the audit log and as the CLI subcommand.
    pub fn op_name(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock-in",
            ClockAction::StartBreak => "break-start",
            ClockAction::EndBreak => "break-end",
            ClockAction::ClockOut => "clock-out",
        }
    }

    /// Past-tense title used in confirmation messages.
    pub fn title(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "Clocked In",
            ClockAction::StartBreak => "Break Started",
            ClockAction::EndBreak => "Break Ended",
            ClockAction::ClockOut => "Clocked Out",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClockAction::ClockIn => "clock in",
            ClockAction::StartBreak => "start a break",
            ClockAction::EndBreak => "end a break",
            ClockAction::ClockOut => "clock out",
        };
        f.write_str(s)
    }
}
