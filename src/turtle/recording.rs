use super::Turtle;

/// A single primitive issued to a turtle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Forward(i32),
    Turn(f64),
}

/// Turtle that keeps the command stream instead of moving
///
/// Lets tests assert on exactly what a drawing routine emitted.
#[derive(Debug, Default)]
pub struct RecordingTurtle {
    commands: Vec<Command>,
}

impl RecordingTurtle {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn forward_count(&self) -> usize {
        self.forward_distances().count()
    }

    pub fn forward_distances(&self) -> impl Iterator<Item = i32> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::Forward(distance) => Some(*distance),
            Command::Turn(_) => None,
        })
    }

    pub fn turn_angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::Turn(degrees) => Some(*degrees),
            Command::Forward(_) => None,
        })
    }

    /// Sum of every turn issued, unnormalized
    pub fn total_turn(&self) -> f64 {
        self.turn_angles().sum()
    }
}

impl Turtle for RecordingTurtle {
    fn forward(&mut self, distance: i32) {
        self.commands.push(Command::Forward(distance));
    }

    fn turn(&mut self, degrees: f64) {
        self.commands.push(Command::Turn(degrees));
    }
}
