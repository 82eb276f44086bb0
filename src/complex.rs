//! Complex arithmetic used by the transform.
//!
//! Addition and multiplication come from `num`, `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`.
//! Polar form is never stored, only derived with [`Complex::norm`] and [`Complex::arg`].

pub type Complex = num::complex::Complex<f64>;

/// `e^{i·theta}`
pub fn expi<T>(theta: T) -> num::complex::Complex<T>
where
    T: num::Float,
{
    num::complex::Complex::new(theta.cos(), theta.sin())
}
