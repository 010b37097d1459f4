use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use uicommand::{
    Command, CommandInvoker, CommandManager, CommandRef, CommandResult, Component,
    ComponentCommand, ComponentId, ComponentRef, ComponentType, RevertableCommand,
    TriggerHandler, TypedCommandInvoker, UndoStack,
};

struct MockControl {
    id: ComponentId,
    enabled: bool,
    checked: bool,
    trigger: Option<TriggerHandler>,
}

impl MockControl {
    fn new() -> Self {
        Self {
            id: ComponentId::new(),
            enabled: true,
            checked: false,
            trigger: None,
        }
    }
}

impl Component for MockControl {
    fn component_type(&self) -> ComponentType {
        ComponentType::of::<Self>()
    }

    fn id(&self) -> ComponentId {
        self.id
    }

    fn connect_trigger(&mut self, handler: TriggerHandler) {
        self.trigger = Some(handler);
    }

    fn disconnect_trigger(&mut self) {
        self.trigger = None;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct IncrementCommand {
    counter: Rc<RefCell<i64>>,
}

impl Command for IncrementCommand {
    fn execute(&mut self) -> CommandResult<()> {
        *self.counter.borrow_mut() += 1;
        Ok(())
    }

    fn description(&self) -> String {
        "Increment".to_string()
    }
}

impl RevertableCommand for IncrementCommand {
    fn undo(&mut self) -> CommandResult<()> {
        *self.counter.borrow_mut() -= 1;
        Ok(())
    }

    fn redo(&mut self) -> CommandResult<()> {
        *self.counter.borrow_mut() += 1;
        Ok(())
    }
}

fn increment_command(counter: &Rc<RefCell<i64>>) -> Rc<RefCell<IncrementCommand>> {
    Rc::new(RefCell::new(IncrementCommand {
        counter: Rc::clone(counter),
    }))
}

fn as_component(control: &Rc<RefCell<MockControl>>) -> ComponentRef {
    control.clone()
}

/// Benchmark one undo/redo cycle at different history depths
fn bench_undo_redo_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("undo_redo_cycle");

    for depth in [10, 100, 1000] {
        let counter = Rc::new(RefCell::new(0i64));
        let mut history = UndoStack::new();
        for _ in 0..depth {
            let command = increment_command(&counter);
            command.borrow_mut().execute().unwrap();
            history.add(command);
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth_{}", depth)),
            &depth,
            |b, _| {
                b.iter(|| {
                    black_box(history.undo().unwrap());
                    black_box(history.redo().unwrap());
                });
            },
        );
    }
    group.finish();
}

/// Benchmark trigger firing through a binding (the hot path of every click)
fn bench_trigger_dispatch(c: &mut Criterion) {
    let counter = Rc::new(RefCell::new(0i64));
    let control = Rc::new(RefCell::new(MockControl::new()));
    let mut invoker = TypedCommandInvoker::<MockControl>::new();
    let command: CommandRef = increment_command(&counter);
    invoker.add_instance(&as_component(&control), command).unwrap();

    c.bench_function("trigger_dispatch", |b| {
        b.iter(|| {
            let handler = control.borrow().trigger.clone().unwrap();
            handler();
            black_box(*counter.borrow());
        });
    });
}

/// Benchmark catalog lookup at different catalog sizes
fn bench_catalog_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");

    for size in [10, 100, 1000] {
        let counter = Rc::new(RefCell::new(0i64));
        let mut manager = CommandManager::new();
        for i in 0..size {
            let command: CommandRef = increment_command(&counter);
            manager.add_command(format!("command_{}", i), command).unwrap();
        }
        let name = format!("command_{}", size / 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_commands", size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(manager.get_command(black_box(&name)).unwrap());
                });
            },
        );
    }
    group.finish();
}

/// Benchmark checked-state fan-out over a growing number of bound controls
fn bench_state_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_fan_out");

    for instances in [1, 8, 64] {
        let counter = Rc::new(RefCell::new(0i64));
        let manager = CommandManager::shared();
        manager
            .borrow_mut()
            .register_command_invoker(Box::new(TypedCommandInvoker::<MockControl>::new()));

        let mut command = ComponentCommand::new(
            &manager,
            IncrementCommand {
                counter: Rc::clone(&counter),
            },
        );

        // Keep the controls alive or fan-out would prune them
        let controls: Vec<Rc<RefCell<MockControl>>> = (0..instances)
            .map(|_| Rc::new(RefCell::new(MockControl::new())))
            .collect();
        for control in &controls {
            command.add_instance(&as_component(control)).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_instances", instances)),
            &instances,
            |b, _| {
                b.iter(|| {
                    command.set_checked(true).unwrap();
                    command.set_checked(false).unwrap();
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_undo_redo_cycle,
    bench_trigger_dispatch,
    bench_catalog_lookup,
    bench_state_fan_out
);
criterion_main!(benches);
