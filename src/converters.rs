//! A registry of conversions between pitch types, keyed by [TypeId].
//!
//! Converters are registered for direct neighbours only (for example spelled to enharmonic, and
//! enharmonic to log-frequency). When a converter is registered with implicit creation, the
//! registry composes it with every chain of known converters into its source and out of its
//! target, so that all transitively reachable conversions become available. Replacing a
//! converter also replaces it inside every composition that used it.
//!
//! ```
//! use pitchtypes::{converters::Registry, enharmonic::EnharmonicPitch, spelled::SpelledPitch};
//!
//! let registry = Registry::with_default_converters().unwrap();
//! let p: SpelledPitch = "Dbb1".parse().unwrap();
//! let midi: EnharmonicPitch = registry.convert(p).unwrap();
//! assert_eq!(midi.midi(), 24);
//! ```
use std::{
    any::{type_name, Any, TypeId},
    collections::{HashMap, HashSet, VecDeque},
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::{debug, trace};

use crate::{
    enharmonic::EnharmonicFamily,
    error::PitchErr,
    generic::GenericFamily,
    harmonic::{HarmonicInterval, HarmonicIntervalClass},
    interval::{Interval, Pitch, PitchFamily},
    logfreq::LogFreqFamily,
    spelled::{SpelledFamily, SpelledInterval, SpelledIntervalClass},
};

type Boxed = Box<dyn Any + Send>;
type Stage = Arc<dyn Fn(Boxed) -> Result<Boxed, PitchErr> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    /// Registered directly.
    Explicit,
    /// Composed by the registry from explicit converters.
    Implicit,
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterKind::Explicit => write!(f, "explicit"),
            ConverterKind::Implicit => write!(f, "implicit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOptions {
    /// Replace an existing explicit converter between the same types.
    pub overwrite_explicit: bool,
    /// Replace an existing implicit converter between the same types.
    pub overwrite_implicit: bool,
    pub create_implicit: bool,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        RegisterOptions {
            overwrite_explicit: false,
            overwrite_implicit: true,
            create_implicit: true,
        }
    }
}

#[derive(Clone)]
struct Pipeline {
    kind: ConverterKind,
    stages: Vec<Stage>,
    /// The types visited, from source to target, one explicit converter per step.
    path: Vec<TypeId>,
}

impl Pipeline {
    fn visits(&self, from: TypeId, to: TypeId) -> bool {
        match self.path.iter().position(|n| *n == from) {
            Some(i) => self.path[i + 1..].contains(&to),
            None => false,
        }
    }
}

#[derive(Default)]
struct Converters {
    pipelines: HashMap<TypeId, HashMap<TypeId, Pipeline>>,
    names: HashMap<TypeId, &'static str>,
}

fn short_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl Converters {
    fn get(&self, from: TypeId, to: TypeId) -> Option<&Pipeline> {
        self.pipelines.get(&from)?.get(&to)
    }

    fn insert(&mut self, from: TypeId, to: TypeId, pipeline: Pipeline) {
        self.pipelines.entry(from).or_default().insert(to, pipeline);
    }

    fn name(&self, id: TypeId) -> &'static str {
        self.names.get(&id).copied().unwrap_or("<unknown>")
    }

    fn explicit(&self, from: TypeId, to: TypeId) -> Option<&Stage> {
        self.get(from, to)
            .filter(|p| p.kind == ConverterKind::Explicit)
            .and_then(|p| p.stages.first())
    }

    fn neighbours(&self, node: TypeId, forward: bool) -> Vec<TypeId> {
        if forward {
            self.pipelines
                .get(&node)
                .into_iter()
                .flat_map(|targets| targets.keys().copied())
                .filter(|y| self.explicit(node, *y).is_some())
                .collect()
        } else {
            self.pipelines
                .keys()
                .copied()
                .filter(|x| self.explicit(*x, node).is_some())
                .collect()
        }
    }

    /// Shortest chains of explicit converters out of `start` (or into it, if not `forward`),
    /// keyed by the type at the other end. Paths are listed in conversion order.
    fn search(&self, start: TypeId, forward: bool) -> HashMap<TypeId, Vec<TypeId>> {
        let mut paths = HashMap::from([(start, vec![start])]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let base = paths.get(&node).cloned().unwrap_or_default();
            for next in self.neighbours(node, forward) {
                if paths.contains_key(&next) {
                    continue;
                }
                let mut path = base.clone();
                if forward {
                    path.push(next);
                } else {
                    path.insert(0, next);
                }
                paths.insert(next, path);
                queue.push_back(next);
            }
        }
        paths
    }

    /// Insert the composition of the explicit converters along `path`, unless its endpoints
    /// already have a converter.
    fn insert_implicit(&mut self, path: Vec<TypeId>) {
        let (Some(&x), Some(&y)) = (path.first(), path.last()) else {
            return;
        };
        if x == y || self.get(x, y).is_some() {
            return;
        }
        let Some(stages) = path
            .windows(2)
            .map(|w| self.explicit(w[0], w[1]).cloned())
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };
        debug!("implicit converter {} -> {}", self.name(x), self.name(y));
        self.insert(
            x,
            y,
            Pipeline {
                kind: ConverterKind::Implicit,
                stages,
                path,
            },
        );
    }

    /// Compose the explicit converter `from -> to` with every chain of explicit converters that
    /// leads into `from` and every chain that leaves `to`. Existing entries are left alone.
    fn close_over(&mut self, from: TypeId, to: TypeId) {
        let heads = self.search(from, false);
        let tails = self.search(to, true);
        for head in heads.values() {
            for tail in tails.values() {
                let path: Vec<TypeId> = head.iter().chain(tail).copied().collect();
                if path.iter().collect::<HashSet<_>>().len() == path.len() {
                    self.insert_implicit(path);
                }
            }
        }
    }

    /// Remove the implicit converters that pass through `from` and later `to`, returning their
    /// endpoints.
    fn invalidate(&mut self, from: TypeId, to: TypeId) -> Vec<(TypeId, TypeId)> {
        let stale: Vec<(TypeId, TypeId)> = self
            .pipelines
            .iter()
            .flat_map(|(x, targets)| {
                targets
                    .iter()
                    .filter(|(_, p)| p.kind == ConverterKind::Implicit && p.visits(from, to))
                    .map(move |(y, _)| (*x, *y))
            })
            .collect();
        for (x, y) in &stale {
            if let Some(targets) = self.pipelines.get_mut(x) {
                targets.remove(y);
            }
        }
        stale
    }

    fn rebuild(&mut self, pairs: Vec<(TypeId, TypeId)>) {
        for (x, y) in pairs {
            if let Some(path) = self.search(x, true).remove(&y) {
                self.insert_implicit(path);
            }
        }
    }
}

/// Thread-safe; share it with an [Arc].
#[derive(Default)]
pub struct Registry {
    inner: RwLock<Converters>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that knows all conversions between the families of this crate: spelled to
    /// enharmonic, spelled to generic, enharmonic to log-frequency, spelled intervals to harmonic
    /// (Pythagorean) intervals, and pitches and intervals to their classes within each family,
    /// together with all their compositions.
    pub fn with_default_converters() -> Result<Self, PitchErr> {
        let registry = Self::new();
        registry.register_classes::<SpelledFamily>()?;
        registry.register_classes::<EnharmonicFamily>()?;
        registry.register_classes::<LogFreqFamily>()?;
        registry.register_classes::<GenericFamily>()?;
        registry.register_family_conversion::<SpelledFamily, EnharmonicFamily>()?;
        registry.register_family_conversion::<SpelledFamily, GenericFamily>()?;
        registry.register_family_conversion::<EnharmonicFamily, LogFreqFamily>()?;
        registry.register(|i: HarmonicInterval| i.to_class(), true)?;
        registry.register(|i: SpelledInterval| HarmonicInterval::from(i), true)?;
        registry.register(|ic: SpelledIntervalClass| HarmonicIntervalClass::from(ic), true)?;
        Ok(registry)
    }

    fn register_classes<F: PitchFamily>(&self) -> Result<(), PitchErr>
    where
        F::Pitch: Send + 'static,
        F::Interval: Send + 'static,
        F::PitchClass: Send + 'static,
        F::IntervalClass: Send + 'static,
    {
        self.register(|p: F::Pitch| p.to_class(), true)?;
        self.register(|i: F::Interval| i.to_class(), true)
    }

    fn register_family_conversion<F: PitchFamily, G: PitchFamily>(&self) -> Result<(), PitchErr>
    where
        F::Pitch: Send + 'static,
        F::Interval: Send + 'static,
        F::PitchClass: Send + 'static,
        F::IntervalClass: Send + 'static,
        G::Pitch: From<F::Pitch> + Send + 'static,
        G::Interval: From<F::Interval> + Send + 'static,
        G::PitchClass: From<F::PitchClass> + Send + 'static,
        G::IntervalClass: From<F::IntervalClass> + Send + 'static,
    {
        self.register(|x: F::Pitch| G::Pitch::from(x), true)?;
        self.register(|x: F::Interval| G::Interval::from(x), true)?;
        self.register(|x: F::PitchClass| G::PitchClass::from(x), true)?;
        self.register(|x: F::IntervalClass| G::IntervalClass::from(x), true)
    }

    fn read(&self) -> RwLockReadGuard<'_, Converters> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Converters> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `f` as the converter from `A` to `B`, replacing any existing one.
    pub fn register<A, B, F>(&self, f: F, create_implicit: bool) -> Result<(), PitchErr>
    where
        A: Any + Send,
        B: Any + Send,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.register_with(
            f,
            RegisterOptions {
                overwrite_explicit: true,
                overwrite_implicit: true,
                create_implicit,
            },
        )
    }

    pub fn register_with<A, B, F>(&self, f: F, options: RegisterOptions) -> Result<(), PitchErr>
    where
        A: Any + Send,
        B: Any + Send,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let (from, to) = (TypeId::of::<A>(), TypeId::of::<B>());
        if from == to {
            return Err(PitchErr::SelfConversion(short_name::<A>()));
        }

        let mut converters = self.write();
        let replaced = match converters.get(from, to) {
            Some(existing) => {
                let allowed = match existing.kind {
                    ConverterKind::Explicit => options.overwrite_explicit,
                    ConverterKind::Implicit => options.overwrite_implicit,
                };
                if !allowed {
                    return Err(PitchErr::ConverterExists {
                        from: short_name::<A>(),
                        to: short_name::<B>(),
                        kind: existing.kind,
                    });
                }
                true
            }
            None => false,
        };
        // compositions built on the replaced converter must not outlive it
        let stale = if replaced {
            converters.invalidate(from, to)
        } else {
            vec![]
        };

        let stage: Stage = Arc::new(move |value: Boxed| {
            value
                .downcast::<A>()
                .map(|a| Box::new(f(*a)) as Boxed)
                .map_err(|_| PitchErr::NoConversionPath(short_name::<A>(), short_name::<B>()))
        });
        converters.names.insert(from, short_name::<A>());
        converters.names.insert(to, short_name::<B>());
        converters.insert(
            from,
            to,
            Pipeline {
                kind: ConverterKind::Explicit,
                stages: vec![stage],
                path: vec![from, to],
            },
        );
        debug!(
            "registered converter {} -> {}",
            short_name::<A>(),
            short_name::<B>()
        );

        if options.create_implicit {
            converters.close_over(from, to);
        }
        converters.rebuild(stale);
        Ok(())
    }

    /// Converting a value to its own type always succeeds and returns it unchanged.
    pub fn convert<A: Any + Send, B: Any + Send>(&self, value: A) -> Result<B, PitchErr> {
        let no_path = || PitchErr::NoConversionPath(short_name::<A>(), short_name::<B>());
        let mut boxed: Boxed = Box::new(value);
        if TypeId::of::<A>() != TypeId::of::<B>() {
            // don't hold the lock while running user code
            let stages = match self.read().get(TypeId::of::<A>(), TypeId::of::<B>()) {
                Some(pipeline) => pipeline.stages.clone(),
                None => {
                    trace!(
                        "no converter {} -> {}",
                        short_name::<A>(),
                        short_name::<B>()
                    );
                    return Err(no_path());
                }
            };
            for stage in &stages {
                boxed = stage(boxed)?;
            }
        }
        boxed.downcast::<B>().map(|b| *b).map_err(|_| no_path())
    }

    pub fn has_path<A: Any, B: Any>(&self) -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
            || self.read().get(TypeId::of::<A>(), TypeId::of::<B>()).is_some()
    }

    /// `None` if there is no converter. The identity isn't a registered converter.
    pub fn converter_kind<A: Any, B: Any>(&self) -> Option<ConverterKind> {
        self.read()
            .get(TypeId::of::<A>(), TypeId::of::<B>())
            .map(|p| p.kind)
    }
}
