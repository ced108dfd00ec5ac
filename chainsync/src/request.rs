//! Chain-sync requests for either schema.

use ogmios_protocol::{Request, Schema};
use ogmios_types::Point;
use serde_json::{json, Value};

use crate::current::{FIND_INTERSECTION, NEXT_BLOCK};
use crate::legacy::{FIND_INTERSECT, REQUEST_NEXT};

/// Ask the node for the best intersection with `points`.
pub fn find_intersection(schema: Schema, points: &[Point]) -> Request {
    match schema {
        Schema::Legacy => Request::new(FIND_INTERSECT, json!({ "points": points })),
        Schema::Current => {
            let points: Vec<Value> = points.iter().map(Point::to_current_json).collect();
            Request::new(FIND_INTERSECTION, json!({ "points": points }))
        }
    }
}

/// Ask the node for the next chain-sync event.
pub fn next_block(schema: Schema) -> Request {
    match schema {
        Schema::Legacy => Request::new(REQUEST_NEXT, json!({})),
        Schema::Current => Request::new(NEXT_BLOCK, json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_intersection_spells_points_per_schema() {
        let points = [Point::specific(3, "h"), Point::Origin];

        let legacy = find_intersection(Schema::Legacy, &points);
        assert_eq!(legacy.method, "FindIntersect");
        assert_eq!(
            legacy.params,
            json!({ "points": [{ "slot": 3, "hash": "h" }, "origin"] })
        );

        let current = find_intersection(Schema::Current, &points);
        assert_eq!(current.method, "findIntersection");
        assert_eq!(
            current.params,
            json!({ "points": [{ "slot": 3, "id": "h" }, "origin"] })
        );
    }

    #[test]
    fn next_block_method_names() {
        assert_eq!(next_block(Schema::Legacy).method, "RequestNext");
        assert_eq!(next_block(Schema::Current).method, "nextBlock");
    }
}
