//! Named swizzle accessors over the standard `x y z w` alphabet, generated for every
//! pattern of length 1 to 4. Each one resolves against the receiver's actual name set at
//! runtime, so they answer `None` on vectors named from another alphabet (or when the
//! pattern is longer than the vector), matching the permissive view semantics.

use crate::vector::{Vector, Vector2, Vector3, Vector4};
use num_traits::Float;
use paste::paste;

macro_rules! swizzle_pairs {
    ($($a:ident)+) => { $( swizzle_pairs_with!($a; x y z w); )+ };
}

macro_rules! swizzle_pairs_with {
    ($a:ident; $($b:ident)+) => {
        paste! {
            $(
                pub fn [<$a $b>](&self) -> Option<Vector2<T>>
                {
                    self.swizzle::<2>(concat!(stringify!($a), stringify!($b))).ok()
                }
            )+
        }
    };
}

macro_rules! swizzle_triples {
    ($($a:ident)+) => { $( swizzle_triples_mid!($a; x y z w); )+ };
}

macro_rules! swizzle_triples_mid {
    ($a:ident; $($b:ident)+) => { $( swizzle_triples_with!($a $b; x y z w); )+ };
}

macro_rules! swizzle_triples_with {
    ($a:ident $b:ident; $($c:ident)+) => {
        paste! {
            $(
                pub fn [<$a $b $c>](&self) -> Option<Vector3<T>>
                {
                    self.swizzle::<3>(concat!(stringify!($a), stringify!($b), stringify!($c))).ok()
                }
            )+
        }
    };
}

macro_rules! swizzle_quads {
    ($($a:ident)+) => { $( swizzle_quads_mid!($a; x y z w); )+ };
}

macro_rules! swizzle_quads_mid {
    ($a:ident; $($b:ident)+) => { $( swizzle_quads_inner!($a $b; x y z w); )+ };
}

macro_rules! swizzle_quads_inner {
    ($a:ident $b:ident; $($c:ident)+) => { $( swizzle_quads_with!($a $b $c; x y z w); )+ };
}

macro_rules! swizzle_quads_with {
    ($a:ident $b:ident $c:ident; $($d:ident)+) => {
        paste! {
            $(
                pub fn [<$a $b $c $d>](&self) -> Option<Vector4<T>>
                {
                    self.swizzle::<4>(concat!(stringify!($a), stringify!($b), stringify!($c), stringify!($d))).ok()
                }
            )+
        }
    };
}

impl<T: Float, const N: usize> Vector<T, N>
{
    pub fn x(&self) -> Option<T> { self.get_component('x').ok() }

    pub fn y(&self) -> Option<T> { self.get_component('y').ok() }

    pub fn z(&self) -> Option<T> { self.get_component('z').ok() }

    pub fn w(&self) -> Option<T> { self.get_component('w').ok() }

    swizzle_pairs!(x y z w);
    swizzle_triples!(x y z w);
    swizzle_quads!(x y z w);
}
