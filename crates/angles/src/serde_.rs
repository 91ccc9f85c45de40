use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Angle;

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.radians())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = f64::deserialize(d)?;
        Ok(Angle::from_radians(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;

    #[test]
    fn test_raw_radians_survive_serialization() {
        let json = serde_json::to_string(&Angle::from_radians(-7.25)).unwrap();
        assert_eq!(json, "-7.25");
        let back: Angle = serde_json::from_str(&json).unwrap();
        assert_about_eq!(back.radians(), -7.25);
    }
}
