use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::compat;
use crate::swap_form::Field;
use crate::swap_form::SwapForm;

/// Per-field debounce timers driving a [`SwapForm`].
///
/// Each field owns at most one live task. A new edit cancels that field's task
/// (and the other field's, whose recompute the edit has superseded) before
/// spawning a fresh one. Tasks belong to the calling component and die with it.
#[derive(Clone, Copy)]
pub struct FieldDebounce {
    form: Signal<SwapForm>,
    tasks: Signal<[Option<Task>; 2]>,
    delay: Duration,
}

impl FieldDebounce {
    /// Applies `value` to `field` right away and schedules the recompute.
    pub fn edit(&mut self, field: Field, value: String) {
        let Some(pending) = self.form.write().edit(field, value) else {
            return;
        };

        let mut form = self.form;
        let delay = self.delay;
        let task = spawn(async move {
            compat::sleep(delay).await;
            if form.write().recompute(pending) {
                dioxus_logger::tracing::debug!(
                    "recomputed from {:?}: input={:?} output={:?}",
                    pending.field,
                    form.peek().input_amount(),
                    form.peek().output_amount(),
                );
            }
        });

        let mut tasks = self.tasks.write();
        for slot in tasks.iter_mut() {
            if let Some(stale) = slot.take() {
                stale.cancel();
            }
        }
        tasks[slot_index(field)] = Some(task);
    }
}

fn slot_index(field: Field) -> usize {
    match field {
        Field::Input => 0,
        Field::Output => 1,
    }
}

pub fn use_field_debounce(form: Signal<SwapForm>, delay: Duration) -> FieldDebounce {
    let tasks = use_signal(|| [None, None]);

    use_drop(move || {
        let mut form = form;
        // Signals may already be gone during unmount.
        if let Ok(mut state) = form.try_write() {
            state.teardown();
        };
    });

    FieldDebounce { form, tasks, delay }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::core::NoOpMutations;
    use dioxus::core::VirtualDom;
    use pretty_assertions::assert_eq;

    use super::*;

    type Snapshot = (String, String, bool);

    #[derive(Props, Clone, PartialEq)]
    struct FormHostProps {
        edits: Vec<(Field, &'static str)>,
        rendered: Rc<RefCell<Vec<Snapshot>>>,
    }

    /// Replays `edits` on mount and records the form after every render.
    fn form_host(props: FormHostProps) -> Element {
        let form = use_signal(SwapForm::default);
        let mut debounce = use_field_debounce(form, Duration::from_millis(300));
        let edits = props.edits.clone();
        use_hook(move || {
            for (field, value) in edits {
                debounce.edit(field, value.to_string());
            }
        });

        let state = form.read();
        props.rendered.borrow_mut().push((
            state.input_amount().to_string(),
            state.output_amount().to_string(),
            state.is_valid(),
        ));
        rsx! { div {} }
    }

    /// Drives the dom until the latest render matches `expected` or the
    /// attempts run out.
    async fn settle(
        dom: &mut VirtualDom,
        rendered: &Rc<RefCell<Vec<Snapshot>>>,
        expected: &Snapshot,
    ) {
        for _ in 0..10 {
            if rendered.borrow().last() == Some(expected) {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn mount(edits: Vec<(Field, &'static str)>) -> (VirtualDom, Rc<RefCell<Vec<Snapshot>>>) {
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(
            form_host,
            FormHostProps {
                edits,
                rendered: rendered.clone(),
            },
        );
        dom.rebuild_in_place();
        (dom, rendered)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_settle_on_the_last_value() {
        let (mut dom, rendered) = mount(vec![
            (Field::Input, "1"),
            (Field::Input, "10"),
            (Field::Input, "100"),
        ]);
        let expected = ("100".to_string(), "85.00".to_string(), true);

        settle(&mut dom, &rendered, &expected).await;

        assert_eq!(rendered.borrow().last(), Some(&expected));
        // Superseded edits never produced a derived amount.
        assert!(rendered
            .borrow()
            .iter()
            .all(|(_, output, _)| output.is_empty() || output == "85.00"));
    }

    #[tokio::test(start_paused = true)]
    async fn output_edit_supersedes_pending_input_recompute() {
        let (mut dom, rendered) = mount(vec![(Field::Input, "100"), (Field::Output, "10")]);
        let expected = ("11.76".to_string(), "10".to_string(), true);

        settle(&mut dom, &rendered, &expected).await;

        assert_eq!(rendered.borrow().last(), Some(&expected));
        assert!(rendered.borrow().iter().all(|(_, output, _)| output != "85.00"));
    }
}
