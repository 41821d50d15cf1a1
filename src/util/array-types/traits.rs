/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// You get primitive floats and integers. That's all that this API is
    /// willing to commit to at the moment. This trait is sealed to avoid
    /// accidental commitments.
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types.
    /// Norms, distances and LU decomposition are only offered over a `Field`.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Internal-use marker traits for generic implementations.
///
/// The public traits above say *which* scalars are allowed; these say
/// what the generic code is allowed to *do* with them.
pub(crate) mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone
        + PartialEq + PartialOrd
        + SelfAdd + SelfMul
        + num_traits::Zero
        + num_traits::One
    { }

    gen_each!{
        @{semiring}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T { }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    {
        fn from_int(i: i8) -> Self;
    }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => {
            impl PrimitiveRing for $T {
                #[inline(always)] fn from_int(i: i8) -> $T { i as $T }
            }
        };
    }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + SelfDiv
    {
        // (allow(unused) because these are added as they're needed)
        #[allow(unused)] fn sqrt(self) -> Self;
        #[allow(unused)] fn abs(self) -> Self;
        #[allow(unused)] fn powf(self, p: Self) -> Self;
        #[allow(unused)] fn max(self, b: Self) -> Self;
    }

    gen_each!{
        @{float}
        for_each!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
                #[inline(always)] fn abs(self) -> $T { self.abs() }
                #[inline(always)] fn powf(self, p: $T) -> $T { self.powf(p) }
                #[inline(always)] fn max(self, b: $T) -> $T { self.max(b) }
            }
        };
    }
}
