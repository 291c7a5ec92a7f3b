//! Block adapter contract and operator registry.
//!
//! A host-facing operator calls one kernel once per sample index across the
//! blocks it receives each processing cycle. The `perform_*` functions are
//! that loop: they validate block lengths up front, then run to completion
//! without allocating, so they are safe to call from the audio callback.
//!
//! Operators are described by a name and a [`Kernel`] function pointer whose
//! signature is part of [`ADAPTER_ABI_VERSION`]. An [`OperatorRegistry`] maps
//! names to operators; build it once at start-up, outside the audio thread,
//! and keep the [`Operator`] values it hands out.

use hashbrown::HashMap;

use crate::convert::{
    a_to_db, cartesian_to_polar, db_to_a, db_to_pow, deg_to_rad, deg_to_turn, polar_to_cartesian,
    pow_to_db, rad_to_deg, rad_to_turn, turn_to_deg, turn_to_rad, wrap_pos_neg_pi,
};
use crate::error::KernelError;
use crate::num::Float;
use crate::poly::bessel_i0;
use crate::scalar::{
    clip, fix_inf, fix_nan, fix_nan_inf, modulo, reciprocal, round, safe_acos, safe_asin,
    safe_atan, safe_atan2, safe_cos, safe_log, safe_pow, safe_sin, safe_sqrt, safe_tan, soft_clip,
};

/// Version of the kernel signatures in [`Kernel`].
///
/// Bumped whenever a variant is added or a signature changes, so hosts built
/// against an older table can refuse to load a newer one.
pub const ADAPTER_ABI_VERSION: u32 = 1;

/// Sample type exchanged with the host.
pub type Sample = f32;

pub type UnaryFn = fn(Sample) -> Sample;
pub type BinaryFn = fn(Sample, Sample) -> Sample;
pub type PairFn = fn(Sample, Sample) -> (Sample, Sample);

/// Per-sample kernel signatures an operator can wrap.
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    /// One inlet, one outlet.
    Unary(UnaryFn),
    /// Two inlets, one outlet.
    Binary(BinaryFn),
    /// Two inlets, two outlets.
    Pair(PairFn),
}

impl Kernel {
    pub const fn inlets(&self) -> usize {
        match self {
            Kernel::Unary(_) => 1,
            Kernel::Binary(_) | Kernel::Pair(_) => 2,
        }
    }

    pub const fn outlets(&self) -> usize {
        match self {
            Kernel::Unary(_) | Kernel::Binary(_) => 1,
            Kernel::Pair(_) => 2,
        }
    }
}

/// Apply `f` to every sample of `input`, writing `output`.
pub fn perform_unary<T: Float, F: Fn(T) -> T>(
    f: F,
    input: &[T],
    output: &mut [T],
) -> Result<(), KernelError> {
    if input.len() != output.len() {
        kernel_log!(
            warn,
            "perform_unary: input {} / output {} block mismatch",
            input.len(),
            output.len()
        );
        return Err(KernelError::MismatchedLengths);
    }
    for (o, &x) in output.iter_mut().zip(input) {
        *o = f(x);
    }
    Ok(())
}

/// Apply `f` to a block in place. Sample `i` is read before it is written.
pub fn perform_unary_in_place<T: Float, F: Fn(T) -> T>(f: F, block: &mut [T]) {
    for x in block.iter_mut() {
        *x = f(*x);
    }
}

/// Apply a two-argument kernel sample by sample.
pub fn perform_binary<T: Float, F: Fn(T, T) -> T>(
    f: F,
    a: &[T],
    b: &[T],
    output: &mut [T],
) -> Result<(), KernelError> {
    if a.len() != output.len() || b.len() != output.len() {
        kernel_log!(
            warn,
            "perform_binary: blocks {}/{} -> {} mismatch",
            a.len(),
            b.len(),
            output.len()
        );
        return Err(KernelError::MismatchedLengths);
    }
    for ((o, &x), &y) in output.iter_mut().zip(a).zip(b) {
        *o = f(x, y);
    }
    Ok(())
}

/// Apply a two-in, two-out kernel sample by sample.
pub fn perform_pair<T: Float, F: Fn(T, T) -> (T, T)>(
    f: F,
    a: &[T],
    b: &[T],
    out_a: &mut [T],
    out_b: &mut [T],
) -> Result<(), KernelError> {
    let n = a.len();
    if b.len() != n || out_a.len() != n || out_b.len() != n {
        kernel_log!(warn, "perform_pair: block lengths disagree");
        return Err(KernelError::MismatchedLengths);
    }
    for i in 0..n {
        let (p, q) = f(a[i], b[i]);
        out_a[i] = p;
        out_b[i] = q;
    }
    Ok(())
}

/// A named kernel, the unit the host instantiates.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub name: &'static str,
    pub kernel: Kernel,
}

impl Operator {
    pub const fn unary(name: &'static str, f: UnaryFn) -> Self {
        Self {
            name,
            kernel: Kernel::Unary(f),
        }
    }

    pub const fn binary(name: &'static str, f: BinaryFn) -> Self {
        Self {
            name,
            kernel: Kernel::Binary(f),
        }
    }

    pub const fn pair(name: &'static str, f: PairFn) -> Self {
        Self {
            name,
            kernel: Kernel::Pair(f),
        }
    }

    pub const fn inlets(&self) -> usize {
        self.kernel.inlets()
    }

    pub const fn outlets(&self) -> usize {
        self.kernel.outlets()
    }

    /// Run one processing cycle.
    ///
    /// `inputs` holds one block per inlet and `outputs` one block per outlet.
    /// Arity and block lengths are checked before any sample is written.
    pub fn perform(
        &self,
        inputs: &[&[Sample]],
        outputs: &mut [&mut [Sample]],
    ) -> Result<(), KernelError> {
        if inputs.len() != self.inlets() || outputs.len() != self.outlets() {
            kernel_log!(
                warn,
                "operator {}: got {} inlets / {} outlets, expected {} / {}",
                self.name,
                inputs.len(),
                outputs.len(),
                self.inlets(),
                self.outlets()
            );
            return Err(KernelError::ArityMismatch);
        }
        match self.kernel {
            Kernel::Unary(f) => perform_unary(f, inputs[0], &mut *outputs[0]),
            Kernel::Binary(f) => perform_binary(f, inputs[0], inputs[1], &mut *outputs[0]),
            Kernel::Pair(f) => {
                let (first, second) = outputs.split_at_mut(1);
                perform_pair(f, inputs[0], inputs[1], &mut *first[0], &mut *second[0])
            }
        }
    }
}

fn clip_unit(x: Sample) -> Sample {
    clip(x, -1.0, 1.0)
}

/// The toolkit's stock operators.
pub static BUILTIN_OPERATORS: &[Operator] = &[
    Operator::unary("atodb", a_to_db::<Sample>),
    Operator::unary("dbtoa", db_to_a::<Sample>),
    Operator::unary("powtodb", pow_to_db::<Sample>),
    Operator::unary("dbtopow", db_to_pow::<Sample>),
    Operator::unary("wrap", wrap_pos_neg_pi::<Sample>),
    Operator::unary("deg2rad", deg_to_rad::<Sample>),
    Operator::unary("deg2turn", deg_to_turn::<Sample>),
    Operator::unary("rad2deg", rad_to_deg::<Sample>),
    Operator::unary("rad2turn", rad_to_turn::<Sample>),
    Operator::unary("turn2deg", turn_to_deg::<Sample>),
    Operator::unary("turn2rad", turn_to_rad::<Sample>),
    Operator::unary("softclip", soft_clip::<Sample>),
    Operator::unary("clip", clip_unit),
    Operator::unary("fixnan", fix_nan::<Sample>),
    Operator::unary("fixinf", fix_inf::<Sample>),
    Operator::unary("fixnaninf", fix_nan_inf::<Sample>),
    Operator::unary("reciprocal", reciprocal::<Sample>),
    Operator::unary("round", round::<Sample>),
    Operator::unary("sqrt", safe_sqrt::<Sample>),
    Operator::unary("log", safe_log::<Sample>),
    Operator::unary("sin", safe_sin::<Sample>),
    Operator::unary("cos", safe_cos::<Sample>),
    Operator::unary("tan", safe_tan::<Sample>),
    Operator::unary("asin", safe_asin::<Sample>),
    Operator::unary("acos", safe_acos::<Sample>),
    Operator::unary("atan", safe_atan::<Sample>),
    Operator::unary("besseli0", bessel_i0::<Sample>),
    Operator::binary("pow", safe_pow::<Sample>),
    Operator::binary("atan2", safe_atan2::<Sample>),
    Operator::binary("modulo", modulo::<Sample>),
    Operator::pair("car2pol", cartesian_to_polar::<Sample>),
    Operator::pair("pol2car", polar_to_cartesian::<Sample>),
];

/// Name to operator table, built at start-up.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<&'static str, Operator>,
}

impl OperatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every entry of [`BUILTIN_OPERATORS`].
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            operators: HashMap::with_capacity(BUILTIN_OPERATORS.len()),
        };
        for op in BUILTIN_OPERATORS {
            registry.register(*op);
        }
        registry
    }

    /// Add an operator, returning the one it displaced under the same name.
    pub fn register(&mut self, op: Operator) -> Option<Operator> {
        kernel_log!(debug, "registering operator {}", op.name);
        self.operators.insert(op.name, op)
    }

    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.operators.get(name)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operators.keys().copied()
    }
}
