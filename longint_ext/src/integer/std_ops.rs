use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::Integer;

macro_rules! integer_binop {
    ($($op:ident $f:ident $op_assign:ident $f_assign:ident => $inherent:ident);*;) => {
        $(
            impl $op for Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, rhs: Self) -> Integer {
                    Integer::$inherent(&self, &rhs)
                }
            }

            impl<'a> $op<&'a Integer> for Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, rhs: &'a Integer) -> Integer {
                    Integer::$inherent(&self, rhs)
                }
            }

            impl<'a> $op<Integer> for &'a Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, rhs: Integer) -> Integer {
                    Integer::$inherent(self, &rhs)
                }
            }

            impl<'a, 'b> $op<&'b Integer> for &'a Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, rhs: &'b Integer) -> Integer {
                    Integer::$inherent(self, rhs)
                }
            }

            impl $op_assign for Integer {
                #[inline]
                fn $f_assign(&mut self, rhs: Self) {
                    *self = Integer::$inherent(self, &rhs);
                }
            }

            impl<'a> $op_assign<&'a Integer> for Integer {
                #[inline]
                fn $f_assign(&mut self, rhs: &'a Integer) {
                    *self = Integer::$inherent(self, rhs);
                }
            }
        )*
    };
}

integer_binop!(
    Add add AddAssign add_assign => add;
    Sub sub SubAssign sub_assign => sub;
    Mul mul MulAssign mul_assign => mul;
    BitAnd bitand BitAndAssign bitand_assign => and;
    BitOr bitor BitOrAssign bitor_assign => or;
    BitXor bitxor BitXorAssign bitxor_assign => xor;
);

macro_rules! integer_unop {
    ($($op:ident $f:ident);*;) => {
        $(
            impl $op for Integer {
                type Output = Integer;

                #[inline]
                fn $f(self) -> Integer {
                    Integer::$f(&self)
                }
            }

            impl<'a> $op for &'a Integer {
                type Output = Integer;

                #[inline]
                fn $f(self) -> Integer {
                    Integer::$f(self)
                }
            }
        )*
    };
}

integer_unop!(
    Neg neg;
    Not not;
);

macro_rules! integer_shift {
    ($($op:ident $f:ident $op_assign:ident $f_assign:ident);*;) => {
        $(
            impl $op<usize> for Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, s: usize) -> Integer {
                    Integer::$f(&self, s)
                }
            }

            impl<'a> $op<usize> for &'a Integer {
                type Output = Integer;

                #[inline]
                fn $f(self, s: usize) -> Integer {
                    Integer::$f(self, s)
                }
            }

            impl $op_assign<usize> for Integer {
                #[inline]
                fn $f_assign(&mut self, s: usize) {
                    *self = Integer::$f(self, s);
                }
            }
        )*
    };
}

integer_shift!(
    Shl shl ShlAssign shl_assign;
    Shr shr ShrAssign shr_assign;
);

macro_rules! integer_from {
    ($($ty:ident $fn:ident);*;) => {
        $(
            impl From<$ty> for Integer {
                #[inline]
                fn from(x: $ty) -> Self {
                    Integer::$fn(x)
                }
            }
        )*
    };
}

integer_from!(
    i32 from_i32;
    u32 from_u32;
    i64 from_i64;
    u64 from_u64;
);
