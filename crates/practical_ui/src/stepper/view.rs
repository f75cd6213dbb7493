use leptos::ev::MouseEvent;
use leptos::*;
use practical_icons::{CHECK, WARNING};

use super::state::{StepDivider, StepIndicator, StepView, StepperError, StepperState};
use crate::primitives::{bool_token, merge_layout_class};
use crate::{Button, ButtonSize, ButtonVariant, Icon, IconSize};

#[derive(Clone)]
/// Caller-owned content of one step.
pub struct StepContent {
    /// Step label shown next to the badge.
    pub label: String,
    /// Body rendered while the step is active.
    pub content: ViewFn,
    /// Validation state of this step.
    pub has_errors: MaybeSignal<bool>,
    /// Disables the "next" control.
    pub disable_next: MaybeSignal<bool>,
}

impl StepContent {
    /// Creates a step without errors and with "next" enabled.
    pub fn new(label: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            has_errors: MaybeSignal::Static(false),
            disable_next: MaybeSignal::Static(false),
        }
    }

    /// Sets the validation state.
    pub fn has_errors(mut self, has_errors: impl Into<MaybeSignal<bool>>) -> Self {
        self.has_errors = has_errors.into();
        self
    }

    /// Sets whether "next" is disabled.
    pub fn disable_next(mut self, disable_next: impl Into<MaybeSignal<bool>>) -> Self {
        self.disable_next = disable_next.into();
        self
    }
}

#[derive(Clone, Default)]
/// Label and optional handler for one of the stepper controls.
pub struct StepperAction {
    /// Button label.
    pub label: String,
    /// Runs after the stepper has applied its own transition.
    pub on_click: Option<Callback<MouseEvent>>,
}

impl StepperAction {
    /// Creates an action with no handler.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
        }
    }

    /// Attaches a click handler.
    pub fn on_click(mut self, on_click: impl Fn(MouseEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(on_click));
        self
    }
}

impl From<&str> for StepperAction {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

fn apply_transition(
    state: RwSignal<StepperState>,
    transition: impl FnOnce(&mut StepperState) -> Result<(), StepperError>,
) -> bool {
    let mut next = state.get_untracked();
    match transition(&mut next) {
        Ok(()) => {
            state.set(next);
            true
        }
        Err(err) => {
            logging::warn!("stepper transition rejected: {err}");
            false
        }
    }
}

#[derive(Clone, Copy)]
struct ActionSlot {
    label: StoredValue<String>,
    on_click: Option<Callback<MouseEvent>>,
}

impl ActionSlot {
    fn new(action: StepperAction) -> Self {
        Self {
            label: store_value(action.label),
            on_click: action.on_click,
        }
    }

    fn fire(self, ev: MouseEvent) {
        if let Some(on_click) = self.on_click {
            on_click.call(ev);
        }
    }
}

#[component]
/// Vertical stepper owning the active/completed state of its steps.
pub fn Stepper(
    /// Steps in order.
    steps: Vec<StepContent>,
    /// "Back" control.
    #[prop(into)]
    prev_action: StepperAction,
    /// "Next" control.
    #[prop(into)]
    next_action: StepperAction,
    /// "Complete" control on the last step.
    #[prop(into)]
    complete_action: StepperAction,
    /// Control shown once the flow has finished.
    #[prop(into)]
    reset_action: StepperAction,
    /// Extra layout class for the root.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = create_rw_signal(StepperState::new(steps.len()));
    let error_flags: Vec<MaybeSignal<bool>> =
        steps.iter().map(|step| step.has_errors.clone()).collect();
    let has_any_errors = Signal::derive(move || error_flags.iter().any(|flag| flag.get()));

    let prev = ActionSlot::new(prev_action);
    let next = ActionSlot::new(next_action);
    let complete = ActionSlot::new(complete_action);
    let reset = ActionSlot::new(reset_action);

    let rendered_steps = steps
        .into_iter()
        .enumerate()
        .map(|(step, content)| {
            let has_errors = content.has_errors.clone();
            let step_view = Signal::derive(move || {
                state.with(|state| StepView::derive(state, step, has_errors.get()))
            });
            view! {
                <Step
                    step_view=step_view
                    label=content.label
                    content=content.content
                    disable_next=content.disable_next
                    prev_label=prev.label
                    next_label=next.label
                    complete_label=complete.label
                    on_select=Callback::new(move |_: MouseEvent| {
                        apply_transition(state, |state| state.select(step));
                    })
                    on_back=Callback::new(move |ev: MouseEvent| {
                        if apply_transition(state, |state| state.back(step)) {
                            prev.fire(ev);
                        }
                    })
                    on_next=Callback::new(move |ev: MouseEvent| {
                        if apply_transition(state, |state| state.next(step)) {
                            next.fire(ev);
                        }
                    })
                    on_complete=Callback::new(move |ev: MouseEvent| {
                        let has_any_errors = has_any_errors.get_untracked();
                        state.update(|state| state.complete(has_any_errors));
                        complete.fire(ev);
                    })
                />
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-stepper", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-state=move || if state.with(StepperState::is_finished) { "finished" } else { "in-progress" }
        >
            {rendered_steps}
            <Show when=move || state.with(StepperState::is_finished) fallback=|| ()>
                <div data-ui-slot="reset">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |ev: MouseEvent| {
                            state.update(StepperState::reset);
                            reset.fire(ev);
                        })
                    >
                        {move || reset.label.get_value()}
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
/// One step row: badge, connector, label, and, while active, the content and its controls.
pub fn Step(
    /// Derived indicator, divider and control state for this step.
    #[prop(into)]
    step_view: Signal<StepView>,
    /// Label shown next to the badge.
    #[prop(into)]
    label: String,
    /// Body rendered while the step is active.
    content: ViewFn,
    /// Disables the "next" control.
    #[prop(optional, into)]
    disable_next: MaybeSignal<bool>,
    /// "Back" control label.
    prev_label: StoredValue<String>,
    /// "Next" control label.
    next_label: StoredValue<String>,
    /// "Complete" control label.
    complete_label: StoredValue<String>,
    /// Fired by the step number button.
    on_select: Callback<MouseEvent>,
    /// Fired by the "back" control.
    on_back: Callback<MouseEvent>,
    /// Fired by the "next" control.
    on_next: Callback<MouseEvent>,
    /// Fired by the "complete" control.
    on_complete: Callback<MouseEvent>,
) -> impl IntoView {
    let disable_next = Signal::derive(move || disable_next.get());
    let step_number = move || step_view.with(|view| view.step + 1);

    view! {
        <section
            class="ui-step"
            data-ui-primitive="true"
            data-ui-kind="step"
            data-ui-state=move || step_view.with(StepView::state_token)
        >
            <div data-ui-slot="header">
                <button
                    type="button"
                    class="ui-step-number"
                    aria-label=move || format!("Step {}", step_number())
                    aria-current=move || step_view.with(|view| view.active).then_some("step")
                    data-ui-slot="number"
                    data-ui-tone=move || step_view.with(|view| view.tone.token())
                    on:click=move |ev| on_select.call(ev)
                >
                    {move || match step_view.with(|view| view.indicator) {
                        StepIndicator::Number(number) => number.into_view(),
                        StepIndicator::Check => view! { <Icon icon=CHECK size=IconSize::Xs /> }.into_view(),
                        StepIndicator::Warning => view! { <Icon icon=WARNING size=IconSize::Xs /> }.into_view(),
                    }}
                </button>
            </div>
            <div data-ui-slot="body">
                {move || {
                    let (divider, highlighted) =
                        step_view.with(|view| (view.divider, view.divider_highlighted));
                    (divider != StepDivider::None).then(|| view! {
                        <span
                            data-ui-slot="divider"
                            data-ui-size=divider.token()
                            data-ui-highlighted=bool_token(highlighted)
                            aria-hidden="true"
                        ></span>
                    })
                }}
                <span
                    data-ui-slot="label"
                    data-ui-emphasized=move || bool_token(step_view.with(|view| view.emphasized))
                >
                    {label}
                </span>
                <Show when=move || step_view.with(|view| view.active) fallback=|| ()>
                    <div data-ui-slot="content">{content.run()}</div>
                    <div data-ui-slot="controls">
                        <Show when=move || step_view.with(|view| view.controls.back) fallback=|| ()>
                            <Button variant=ButtonVariant::Secondary size=ButtonSize::Md on_click=on_back>
                                {move || prev_label.get_value()}
                            </Button>
                        </Show>
                        <Show when=move || step_view.with(|view| view.controls.next) fallback=|| ()>
                            <Button disabled=disable_next on_click=on_next>
                                {move || next_label.get_value()}
                            </Button>
                        </Show>
                        <Show when=move || step_view.with(|view| view.controls.complete) fallback=|| ()>
                            <Button on_click=on_complete>
                                {move || complete_label.get_value()}
                            </Button>
                        </Show>
                    </div>
                </Show>
            </div>
        </section>
    }
}
