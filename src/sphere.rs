//! Spherical geometry: azimuths, great-circle distances, and destination
//! points on the unit sphere.

use crate::constants::{EARTH_RADIUS_KM, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::LatLng;

/// Normalizes an angle in radians to [0, 2*pi).
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = rads;
  while tmp < 0.0 {
    tmp += M_2PI;
  }
  while tmp >= M_2PI {
    tmp -= M_2PI;
  }
  if tmp == -0.0 {
    tmp = 0.0;
  }
  tmp
}

/// Constrains a latitude to [-pi/2, pi/2] by folding over the poles.
#[inline]
#[must_use]
pub(crate) fn constrain_lat(lat: f64) -> f64 {
  let mut lat = (lat + M_PI) % M_2PI;
  if lat < 0.0 {
    lat += M_2PI;
  }
  lat -= M_PI;
  if lat > M_PI_2 {
    lat = M_PI - lat;
  } else if lat < -M_PI_2 {
    lat = -M_PI - lat;
  }
  lat
}

/// Constrains a longitude to [-pi, pi].
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Converts degrees to radians.
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

impl LatLng {
  /// Whether the components of two coordinates are within `threshold`
  /// radians of each other.
  #[inline]
  #[must_use]
  pub fn almost_equals_threshold(&self, other: &LatLng, threshold: f64) -> bool {
    (self.lat - other.lat).abs() < threshold && (self.lng - other.lng).abs() < threshold
  }

  /// Whether two coordinates are within the standard epsilon (~0.1mm) of
  /// each other.
  #[inline]
  #[must_use]
  pub fn almost_equals(&self, other: &LatLng) -> bool {
    self.almost_equals_threshold(other, EPSILON_RAD)
  }

  /// The azimuth from `self` to `other`, in radians.
  #[inline]
  #[must_use]
  pub(crate) fn azimuth_to(&self, other: &LatLng) -> f64 {
    (other.lat.cos() * (other.lng - self.lng).sin()).atan2(
      self.lat.cos() * other.lat.sin() - self.lat.sin() * other.lat.cos() * (other.lng - self.lng).cos(),
    )
  }

  /// The point at the given azimuth and angular distance from `self`.
  ///
  /// Poles collapse longitude to zero by convention. A distance below the
  /// standard epsilon returns `self` unchanged.
  #[must_use]
  pub(crate) fn destination(&self, az: f64, distance: f64) -> LatLng {
    if distance < EPSILON_RAD {
      return *self;
    }

    let az = pos_angle_rads(az);
    let mut out = LatLng::default();

    if az < EPSILON_RAD || (az - M_PI).abs() < EPSILON_RAD {
      // due north or due south
      out.lat = if az < EPSILON_RAD {
        self.lat + distance
      } else {
        self.lat - distance
      };

      if (out.lat - M_PI_2).abs() < EPSILON_RAD {
        out.lat = M_PI_2;
        out.lng = 0.0;
      } else if (out.lat + M_PI_2).abs() < EPSILON_RAD {
        out.lat = -M_PI_2;
        out.lng = 0.0;
      } else {
        out.lng = constrain_lng(self.lng);
      }
    } else {
      let sin_lat = (self.lat.sin() * distance.cos() + self.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
      out.lat = sin_lat.asin();

      if (out.lat - M_PI_2).abs() < EPSILON_RAD {
        out.lat = M_PI_2;
        out.lng = 0.0;
      } else if (out.lat + M_PI_2).abs() < EPSILON_RAD {
        out.lat = -M_PI_2;
        out.lng = 0.0;
      } else {
        let cos_self_lat = self.lat.cos();
        if cos_self_lat.abs() < EPSILON_RAD {
          // starting at a pole; the azimuth is the longitude
          out.lng = constrain_lng(az);
        } else {
          let inv_cos_out_lat = 1.0 / out.lat.cos();
          let sin_lng = (az.sin() * distance.sin() * inv_cos_out_lat).clamp(-1.0, 1.0);
          let cos_lng =
            ((distance.cos() - self.lat.sin() * out.lat.sin()) / cos_self_lat * inv_cos_out_lat).clamp(-1.0, 1.0);
          out.lng = constrain_lng(self.lng + sin_lng.atan2(cos_lng));
        }
      }
    }
    out
  }

  /// Haversine great-circle distance to another point, in radians.
  #[must_use]
  pub fn distance_rads(&self, other: &LatLng) -> f64 {
    let sin_lat_half = ((other.lat - self.lat) * 0.5).sin();
    let sin_lng_half = ((other.lng - self.lng) * 0.5).sin();
    let a =
      (sin_lat_half * sin_lat_half + self.lat.cos() * other.lat.cos() * sin_lng_half * sin_lng_half).clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
  }

  /// Great-circle distance to another point, in kilometers.
  #[must_use]
  pub fn distance_km(&self, other: &LatLng) -> f64 {
    self.distance_rads(other) * EARTH_RADIUS_KM
  }

  /// Great-circle distance to another point, in meters.
  #[must_use]
  pub fn distance_m(&self, other: &LatLng) -> f64 {
    self.distance_km(other) * 1000.0
  }
}
