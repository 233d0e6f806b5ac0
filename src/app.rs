use crate::countdown::{Countdown, TickOutcome};
use crate::models::{Preset, TaskList};
use crate::notify::{AlertNotifier, Notifier};
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PRESETS: [Preset; 3] = [Preset::Pomodoro, Preset::ShortBreak, Preset::LongBreak];

pub struct PomodoroApp {
    countdown: Countdown,
    tasks: TaskList,
    // Live tick schedule; at most one at a time. Dropping it cancels
    // the underlying interval.
    interval: Option<Interval>,
    new_task: String,
    notifier: Box<dyn Notifier>,
}

pub enum Msg {
    SelectPreset(Preset),
    Start,
    Pause,
    Reset,
    Tick,
    UpdateNewTask(String),
    AddTask,
    ToggleTask(usize),
}

/// Advances the countdown by one tick, raising the blocking expiry
/// notification when it runs out. Returns `true` when the caller must
/// drop the tick schedule.
fn advance(countdown: &mut Countdown, notifier: &dyn Notifier) -> bool {
    match countdown.tick() {
        TickOutcome::Running => false,
        TickOutcome::Expired => {
            log::info!("countdown expired");
            notifier.notify("Time is up!");
            true
        }
    }
}

impl Component for PomodoroApp {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            countdown: Countdown::new(),
            tasks: TaskList::new(),
            interval: None,
            new_task: String::new(),
            notifier: Box::new(AlertNotifier),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectPreset(preset) => {
                self.interval = None;
                self.countdown.set(preset.seconds());
                log::info!("preset selected: {}", preset.label());
                true
            }
            Msg::Start => {
                if self.countdown.start() {
                    let link = ctx.link().clone();
                    self.interval = Some(Interval::new(1000, move || {
                        link.send_message(Msg::Tick);
                    }));
                }
                true
            }
            Msg::Pause => {
                self.interval = None;
                self.countdown.pause();
                true
            }
            Msg::Reset => {
                self.interval = None;
                self.countdown.reset();
                true
            }
            Msg::Tick => {
                if advance(&mut self.countdown, self.notifier.as_ref()) {
                    self.interval = None;
                }
                true
            }
            Msg::UpdateNewTask(value) => {
                self.new_task = value;
                true
            }
            Msg::AddTask => {
                if self.tasks.add(&self.new_task).is_some() {
                    self.new_task.clear();
                } else {
                    self.notifier.notify("Please enter a task name!");
                }
                true
            }
            Msg::ToggleTask(index) => {
                self.tasks.toggle(index);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="p-4 max-w-2xl mx-auto">
                <h1 class="text-2xl font-bold mb-4 text-center">{"Pomodoro Timer"}</h1>
                <div class="space-y-6">
                    <div class="text-center">
                        <p class="text-5xl font-mono mb-4">{self.countdown.display()}</p>
                        <div class="space-x-2 mb-4">
                            {for PRESETS.iter().map(|&preset| {
                                html! {
                                    <button
                                        onclick={ctx.link().callback(move |_| Msg::SelectPreset(preset))}
                                        class="px-4 py-2 bg-gray-200 rounded hover:bg-gray-300 focus:outline-none"
                                    >
                                        {preset.label()}
                                    </button>
                                }
                            })}
                        </div>
                        <div class="space-x-4">
                            <button
                                onclick={ctx.link().callback(|_| Msg::Start)}
                                class="px-6 py-2 bg-green-500 text-white rounded hover:bg-green-600 focus:outline-none"
                            >
                                {"Start"}
                            </button>
                            <button
                                onclick={ctx.link().callback(|_| Msg::Pause)}
                                class="px-6 py-2 bg-red-500 text-white rounded hover:bg-red-600 focus:outline-none"
                            >
                                {"Pause"}
                            </button>
                            <button
                                onclick={ctx.link().callback(|_| Msg::Reset)}
                                class="px-6 py-2 bg-gray-500 text-white rounded hover:bg-gray-600 focus:outline-none"
                            >
                                {"Reset"}
                            </button>
                        </div>
                    </div>

                    <div class="mt-8">
                        <h2 class="text-xl font-bold mb-2">{"Tasks"}</h2>
                        <div class="flex space-x-2 mb-4">
                            <input
                                type="text"
                                value={self.new_task.clone()}
                                onchange={ctx.link().callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::UpdateNewTask(input.value())
                                })}
                                class="flex-1 px-3 py-2 border rounded focus:outline-none focus:border-blue-500"
                                placeholder="New task"
                            />
                            <button
                                onclick={ctx.link().callback(|_| Msg::AddTask)}
                                class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 focus:outline-none"
                            >
                                {"Add Task"}
                            </button>
                        </div>
                        <div class="space-y-2">
                            {for self.tasks.tasks().iter().enumerate().map(|(index, task)| {
                                html! {
                                    <div class="flex items-center space-x-2 p-2 bg-gray-100 rounded">
                                        <input
                                            type="checkbox"
                                            checked={task.completed}
                                            onchange={ctx.link().callback(move |_| Msg::ToggleTask(index))}
                                        />
                                        <label>{&task.text}</label>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
