/*

    Declare data structs needed to parse query JSON files.

    - RootQuery / Query: settings plus the boxes and rays to test
    - BoxJSON, RayJSON: raw entries, converted into Box3D / Ray3D
    - SingleOrVec

    @date: 19 Oct, 2026
*/

use serde::Deserialize;
use smart_default::SmartDefault;

use crate::bbox::Box3D;
use crate::interval::Interval;
use crate::json_parser::{deser_bool, deser_float, deser_u64, deser_usize, deser_vec3};
use crate::numeric::{Float, Vector3};
use crate::ray::Ray3D;


#[derive(Debug, Deserialize)]
pub struct RootQuery {
    #[serde(rename = "Query")]
    pub query: Query,
}

#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Query {
    // Clip slab spans to t >= IntersectionEpsilon before picking the nearest box
    #[serde(rename = "ForwardOnly", deserialize_with = "deser_bool")]
    #[default = true]
    pub forward_only: bool,

    #[serde(rename = "IntersectionEpsilon", deserialize_with = "deser_float")]
    #[default = 0.0]
    pub intersection_epsilon: Float,

    #[serde(rename = "RandomRays", deserialize_with = "deser_usize")]
    #[default = 0]
    pub random_rays: usize,

    #[serde(rename = "Seed", deserialize_with = "deser_u64")]
    #[default = 0]
    pub seed: u64,

    #[serde(rename = "OutputName")]
    #[default = "hits.json"]
    pub output_name: String,

    #[serde(rename = "Box")]
    pub boxes: SingleOrVec<BoxJSON>,

    #[serde(rename = "Ray")]
    pub rays: SingleOrVec<RayJSON>,
}

impl Query {
    /// Parametric range the nearest-hit search is restricted to
    pub fn t_range(&self) -> Interval {
        if self.forward_only {
            Interval::positive(self.intersection_epsilon)
        } else {
            Interval::UNIVERSE
        }
    }

    pub fn all_boxes(&self) -> Vec<Box3D> {
        self.boxes.all().iter().map(BoxJSON::to_box).collect()
    }

    pub fn all_rays(&self) -> Vec<Ray3D> {
        self.rays.all().iter().map(RayJSON::to_ray).collect()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BoxJSON {
    #[serde(rename = "_id", deserialize_with = "deser_usize", default)]
    pub _id: usize,
    #[serde(rename = "Min", deserialize_with = "deser_vec3")]
    pub min: Vector3,
    #[serde(rename = "Max", deserialize_with = "deser_vec3")]
    pub max: Vector3,
}

impl BoxJSON {
    pub fn to_box(&self) -> Box3D {
        Box3D::new(self.min, self.max)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RayJSON {
    #[serde(rename = "_id", deserialize_with = "deser_usize", default)]
    pub _id: usize,
    #[serde(rename = "Origin", deserialize_with = "deser_vec3")]
    pub origin: Vector3,
    #[serde(rename = "Direction", deserialize_with = "deser_vec3")]
    pub direction: Vector3,
}

impl RayJSON {
    pub fn to_ray(&self) -> Ray3D {
        Ray3D::new(self.origin, self.direction)
    }
}


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T> {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}
