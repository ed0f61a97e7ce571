//! Fixed 23-class endoscopy taxonomy.
//!
//! Category paths follow the HyperKvasir layout
//! (`tract / finding-group / finding`). The list is versioned data shared by
//! the classifier and the presentation layer; aggregation code never inspects
//! label contents.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel emitted when a frame has no usable prediction.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Class paths in model output order. Index == classifier class index.
pub const LABELS: [&str; 23] = [
    "lower-gi-tract/anatomical-landmarks/cecum",
    "lower-gi-tract/anatomical-landmarks/ileum",
    "lower-gi-tract/anatomical-landmarks/retroflex-rectum",
    "lower-gi-tract/pathological-findings/hemorrhoids",
    "lower-gi-tract/pathological-findings/polyps",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-0-1",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-1",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-1-2",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-2",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-2-3",
    "lower-gi-tract/pathological-findings/ulcerative-colitis-grade-3",
    "lower-gi-tract/quality-of-mucosal-views/bbps-0-1",
    "lower-gi-tract/quality-of-mucosal-views/bbps-2-3",
    "lower-gi-tract/quality-of-mucosal-views/impacted-stool",
    "lower-gi-tract/therapeutic-interventions/dyed-lifted-polyps",
    "lower-gi-tract/therapeutic-interventions/dyed-resection-margins",
    "upper-gi-tract/anatomical-landmarks/pylorus",
    "upper-gi-tract/anatomical-landmarks/retroflex-stomach",
    "upper-gi-tract/anatomical-landmarks/z-line",
    "upper-gi-tract/pathological-findings/barretts",
    "upper-gi-tract/pathological-findings/barretts-short-segment",
    "upper-gi-tract/pathological-findings/esophagitis-a",
    "upper-gi-tract/pathological-findings/esophagitis-b-d",
];

static LABEL_INDEX: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| LABELS.iter().enumerate().map(|(i, &l)| (l, i)).collect());

static DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            LABELS[0],
            "The cecum is the beginning of the large intestine and a critical landmark in the lower GI tract.",
        ),
        (
            LABELS[1],
            "The ileum is the final section of the small intestine, where vitamin B12 and bile salts are absorbed.",
        ),
        (
            LABELS[2],
            "Retroflex view of the rectum, used to inspect the rectum more thoroughly for polyps or other abnormalities.",
        ),
        (
            LABELS[3],
            "Hemorrhoids are swollen veins in the lower rectum or anus, often causing discomfort or bleeding.",
        ),
        (
            LABELS[4],
            "Polyps are abnormal tissue growths on the lining of the colon or rectum with malignant potential if untreated.",
        ),
        (
            LABELS[5],
            "Ulcerative colitis grade 0-1: minimal to mild inflammation with superficial ulcerations and erythema.",
        ),
        (
            LABELS[6],
            "Ulcerative colitis grade 1: mild inflammation with superficial ulcerations and erythema.",
        ),
        (
            LABELS[7],
            "Ulcerative colitis grade 1-2: moderate inflammation with more pronounced ulcerations.",
        ),
        (
            LABELS[8],
            "Ulcerative colitis grade 2: moderate inflammation and ulceration requiring careful monitoring.",
        ),
        (
            LABELS[9],
            "Ulcerative colitis grade 2-3: severe inflammation with extensive ulceration and erythema.",
        ),
        (
            LABELS[10],
            "Ulcerative colitis grade 3: severe inflammation, deep ulcerations and extensive tissue damage.",
        ),
        (
            LABELS[11],
            "Boston Bowel Preparation Scale 0-1: poor preparation, stool obstructing the mucosal view.",
        ),
        (
            LABELS[12],
            "Boston Bowel Preparation Scale 2-3: fair to good preparation with partial to clear mucosal views.",
        ),
        (
            LABELS[13],
            "Impacted stool obscuring the view during the procedure, compromising mucosal assessment.",
        ),
        (
            LABELS[14],
            "Polyps injected with dye to lift them from the mucosal layer before removal.",
        ),
        (
            LABELS[15],
            "Resection margins stained with dye to verify complete removal of a lesion or polyp.",
        ),
        (
            LABELS[16],
            "The pylorus is the opening from the stomach into the duodenum, controlling passage of stomach contents.",
        ),
        (
            LABELS[17],
            "Retroflex view of the stomach, used to inspect the upper stomach for polyps, ulcers or tumors.",
        ),
        (
            LABELS[18],
            "The Z-line (squamocolumnar junction) where the esophagus meets the stomach, inspected for Barrett's changes.",
        ),
        (
            LABELS[19],
            "Barrett's esophagus: esophageal lining changed to resemble stomach lining, raising cancer risk.",
        ),
        (
            LABELS[20],
            "Short-segment Barrett's esophagus: a limited area of changed esophageal lining.",
        ),
        (
            LABELS[21],
            "Esophagitis grade A: mild inflammation with small, isolated erosions, usually from acid reflux.",
        ),
        (
            LABELS[22],
            "Esophagitis grades B-D: progressively severe inflammation and erosion of the esophageal lining.",
        ),
    ])
});

/// Class index → label. Out-of-range indices have no label.
pub fn label_for_index(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

pub fn index_for_label(label: &str) -> Option<usize> {
    LABEL_INDEX.get(label).copied()
}

/// Clinical description for a taxonomy label. `Unknown` has none.
pub fn description_for(label: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(label).copied()
}
