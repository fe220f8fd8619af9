extern crate nalgebra as na;

use na::{Vector3,Matrix4,Matrix3,Matrix6,UnitQuaternion,Isometry3,Translation3};
use crate::Float;

pub fn from_matrix(mat: &Matrix4<Float>) -> Isometry3<Float> {
    let (t, rot) = decomp(mat);
    Isometry3::<Float>::from_parts(Translation3::from(t), UnitQuaternion::<Float>::from_matrix(&rot))
}

/**
 * Homogeneous transform with the rotation block taken verbatim, i.e. no re-orthogonalisation.
 */
pub fn se3(t: &Vector3<Float>, rotation: &Matrix3<Float>) -> Matrix4<Float> {
    let mut mat = Matrix4::<Float>::identity();
    mat.fixed_view_mut::<3,3>(0,0).copy_from(rotation);
    mat.fixed_view_mut::<3,1>(0,3).copy_from(t);
    mat
}

pub fn decomp(mat: &Matrix4<Float>) -> (Vector3<Float>,Matrix3<Float>) {
    (mat.fixed_view::<3,1>(0,3).into_owned(), mat.fixed_view::<3,3>(0,0).into_owned())
}

/**
 * Rotation matrix of a quaternion given in x,y,z,w order, using the unit-quaternion form
 * (diagonal 1 - 2(yy+zz), ...). The quaternion is not normalized: (0,0,0,s) gives identity for any s.
 */
pub fn rotation_from_xyzw(x: Float, y: Float, z: Float, w: Float) -> Matrix3<Float> {
    let (tx, ty, tz) = (2.0*x, 2.0*y, 2.0*z);
    let (twx, twy, twz) = (tx*w, ty*w, tz*w);
    let (txx, txy, txz) = (tx*x, ty*x, tz*x);
    let (tyy, tyz, tzz) = (ty*y, tz*y, tz*z);

    Matrix3::<Float>::new(1.0-(tyy+tzz), txy-twz, txz+twy,
                          txy+twz, 1.0-(txx+tzz), tyz-twx,
                          txz-twy, tyz+twx, 1.0-(txx+tyy))
}

pub fn covariance_from_row_major(values: &[Float; 36]) -> Matrix6<Float> {
    Matrix6::<Float>::from_row_slice(values.as_slice())
}
