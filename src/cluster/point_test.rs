#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_bounds() {
        let points = vec![Point([3, -2]), Point([-1, 7]), Point([5, 4]), Point([100, 100])];
        let c1 = Cluster {
            id: ClusterId::MIN,
            points: vec![0, 1, 2],
        };

        let (min, max) = c1.bounds(&points).expect("cluster has members");
        assert_eq!(min, Point([-1, -2]));
        assert_eq!(max, Point([5, 7]));
    }

    #[test]
    fn test_bounds_empty_cluster() {
        let c1 = Cluster {
            id: ClusterId::MIN,
            points: Vec::new(),
        };
        assert_eq!(c1.bounds(&[Point([0, 0])]), None);
    }

    #[test]
    fn test_within_is_inclusive_per_axis() {
        let p = Point::new(0, 0);
        assert!(p.within(&Point([2, -2]), 2));
        assert!(!p.within(&Point([3, 0]), 2));
        assert!(!p.within(&Point([0, -3]), 2));
        assert!(p.within(&p, 0));
    }

    #[test]
    fn test_within_does_not_overflow() {
        let a = Point([i32::MIN, i32::MAX]);
        let b = Point([i32::MAX, i32::MIN]);
        assert!(!a.within(&b, 1));
        assert!(a.within(&b, i64::from(u32::MAX)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point([-4, 12]).to_string(), "-4 12");
        assert_eq!(Point::new(1, 2).x(), 1);
        assert_eq!(Point::new(1, 2).y(), 2);
    }
}
