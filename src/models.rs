/// The three fixed durations selectable from the mode buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Preset {
    pub fn seconds(self) -> u32 {
        match self {
            Preset::Pomodoro => 25 * 60,
            Preset::ShortBreak => 5 * 60,
            Preset::LongBreak => 15 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Pomodoro => "Pomodoro",
            Preset::ShortBreak => "Short Break",
            Preset::LongBreak => "Long Break",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

/// Insertion-ordered task checklist. Tasks can be added and toggled but
/// never removed, edited, or reordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Trims the input and appends a new unchecked task. Returns `None`
    /// for blank input, leaving the list untouched.
    pub fn add(&mut self, raw: &str) -> Option<&Task> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.tasks.push(Task {
            text: text.to_string(),
            completed: false,
        });
        self.tasks.last()
    }

    /// Flips the completed flag of the task at `index`. Out-of-range
    /// indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.completed = !task.completed;
        }
    }
}
