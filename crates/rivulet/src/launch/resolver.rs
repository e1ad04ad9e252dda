//! Entry-point resolution: construction-strategy selection and the
//! describe-and-exit check.

use std::any::{Any, TypeId};

use crate::config::{Props, StreamConfig};

use super::error::LaunchError;
use super::traits::StreamApp;

type BoxedArg = Box<dyn Any + Send>;

/// Variable-length launch argument list.
///
/// Each argument is an owned, typed value. A single [`Props`] argument is
/// recognized specially: it selects the zero-argument construction path and
/// may carry the describe marker.
#[derive(Default)]
pub struct LaunchArgs {
    args: Vec<BoxedArg>,
}

impl LaunchArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed constructor argument.
    pub fn arg<T: Any + Send>(mut self, value: T) -> Self {
        self.args.push(Box::new(value));
        self
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The configuration-properties argument, if it is the entire list.
    pub(crate) fn sole_props(&self) -> Option<&Props> {
        match self.args.as_slice() {
            [only] => only.downcast_ref::<Props>(),
            _ => None,
        }
    }

    /// Ordered runtime types of the arguments.
    fn signature(&self) -> Vec<TypeId> {
        self.args.iter().map(|arg| (**arg).type_id()).collect()
    }
}

type ZeroCtor<A> = Box<dyn Fn() -> anyhow::Result<A> + Send + Sync>;
type TypedCtor<A> = Box<dyn Fn(Vec<BoxedArg>) -> anyhow::Result<A> + Send + Sync>;

struct TypedConstructor<A> {
    signature: Vec<TypeId>,
    build: TypedCtor<A>,
}

/// Registry of construction strategies for an application type.
///
/// Replaces runtime overload resolution with an explicit dispatcher: a
/// distinguished zero-argument strategy plus strategies keyed by the ordered
/// runtime types of the supplied arguments.
pub struct ConstructorSet<A> {
    zero: Option<ZeroCtor<A>>,
    typed: Vec<TypedConstructor<A>>,
}

impl<A: 'static> ConstructorSet<A> {
    pub fn new() -> Self {
        Self {
            zero: None,
            typed: Vec::new(),
        }
    }

    /// Register the zero-argument strategy. Used when the argument list is
    /// empty or is a single properties object.
    pub fn zero_arg(mut self, f: impl Fn() -> anyhow::Result<A> + Send + Sync + 'static) -> Self {
        self.zero = Some(Box::new(f));
        self
    }

    /// Zero-argument strategy backed by `Default`.
    pub fn zero_arg_default(self) -> Self
    where
        A: Default,
    {
        self.zero_arg(|| Ok(A::default()))
    }

    /// Strategy taking one typed argument.
    pub fn unary<T: Any + Send>(
        mut self,
        f: impl Fn(T) -> anyhow::Result<A> + Send + Sync + 'static,
    ) -> Self {
        self.typed.push(TypedConstructor {
            signature: vec![TypeId::of::<T>()],
            build: Box::new(move |mut args| f(take_arg::<T>(&mut args)?)),
        });
        self
    }

    /// Strategy taking two typed arguments, in order.
    pub fn binary<T1: Any + Send, T2: Any + Send>(
        mut self,
        f: impl Fn(T1, T2) -> anyhow::Result<A> + Send + Sync + 'static,
    ) -> Self {
        self.typed.push(TypedConstructor {
            signature: vec![TypeId::of::<T1>(), TypeId::of::<T2>()],
            build: Box::new(move |mut args| {
                let first = take_arg::<T1>(&mut args)?;
                let second = take_arg::<T2>(&mut args)?;
                f(first, second)
            }),
        });
        self
    }
}

impl<A: 'static> Default for ConstructorSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pop the front argument as `T`. Cannot mismatch once the signature matched,
/// but a broken registration still surfaces as an error instead of a panic.
fn take_arg<T: Any>(args: &mut Vec<BoxedArg>) -> anyhow::Result<T> {
    anyhow::ensure!(!args.is_empty(), "constructor argument list exhausted");
    args.remove(0)
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow::anyhow!("constructor argument type mismatch"))
}

/// Result of resolving an entry point inside the worker.
pub(crate) enum Resolution<A> {
    /// Application constructed and its configuration read; ready for the
    /// lifecycle hooks.
    Ready { app: A, config: StreamConfig },
    /// Describe-and-exit was requested and satisfied; nothing to run.
    Described,
}

impl<A> std::fmt::Debug for Resolution<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Ready { config, .. } => f
                .debug_struct("Ready")
                .field("config", config)
                .finish_non_exhaustive(),
            Resolution::Described => f.write_str("Described"),
        }
    }
}

/// Select a construction strategy, build the application, read its declared
/// configuration, and short-circuit if describe mode was requested.
pub(crate) fn resolve<A: StreamApp>(args: LaunchArgs) -> Result<Resolution<A>, LaunchError> {
    let set = A::constructors();
    let describe = args
        .sole_props()
        .map(Props::describe_requested)
        .unwrap_or(false);

    let app = if args.is_empty() || args.sole_props().is_some() {
        let zero = set.zero.as_ref().ok_or_else(|| {
            LaunchError::Resolution(format!(
                "no zero-argument construction strategy registered for {}",
                std::any::type_name::<A>()
            ))
        })?;
        zero().map_err(|e| LaunchError::Resolution(format!("constructor failed: {}", e)))?
    } else {
        let signature = args.signature();
        let ctor = set
            .typed
            .iter()
            .find(|c| c.signature == signature)
            .ok_or_else(|| {
                LaunchError::Resolution(format!(
                    "no construction strategy matches the {} supplied argument(s) for {}",
                    args.len(),
                    std::any::type_name::<A>()
                ))
            })?;
        (ctor.build)(args.args)
            .map_err(|e| LaunchError::Resolution(format!("constructor failed: {}", e)))?
    };

    let config = app.config().map_err(|e| {
        LaunchError::Resolution(format!("configuration accessor failed: {}", e))
    })?;

    if describe {
        println!("{}", describe_line::<A>(&config));
        return Ok(Resolution::Described);
    }

    Ok(Resolution::Ready { app, config })
}

/// The `<fully-qualified-type>=<rendered-config>` describe output line.
pub(crate) fn describe_line<A: StreamApp>(config: &StreamConfig) -> String {
    format!("{}={}", std::any::type_name::<A>(), config)
}
