//! Built-in library table.
//!
//! Relative destination path and CDN URL for every vendored front-end
//! library, in download order. Versions are pinned in the URLs; updating a
//! library means editing its row here.

/// (destination relative to the libs root, source URL)
pub(super) const BUNDLED: &[(&str, &str)] = &[
    // Core utilities
    (
        "decimal.min.js",
        "https://cdn.jsdelivr.net/npm/decimal.js@10.4.3/decimal.min.js",
    ),
    (
        "dayjs.min.js",
        "https://cdn.jsdelivr.net/npm/dayjs@1.11.10/dayjs.min.js",
    ),
    (
        "dayjs-locale-zh-tw.min.js",
        "https://cdn.jsdelivr.net/npm/dayjs@1.11.10/locale/zh-tw.js",
    ),
    (
        "lodash.min.js",
        "https://cdn.jsdelivr.net/npm/lodash@4.17.21/lodash.min.js",
    ),
    (
        "dompurify.min.js",
        "https://cdn.jsdelivr.net/npm/dompurify@3.0.8/dist/purify.min.js",
    ),
    // Persistence
    (
        "dexie.min.js",
        "https://cdn.jsdelivr.net/npm/dexie@3.2.4/dist/dexie.min.js",
    ),
    // PDF
    (
        "pdf.min.js",
        "https://cdn.jsdelivr.net/npm/pdfjs-dist@3.11.174/build/pdf.min.js",
    ),
    (
        "pdf.worker.min.js",
        "https://cdn.jsdelivr.net/npm/pdfjs-dist@3.11.174/build/pdf.worker.min.js",
    ),
    // File handling
    (
        "file-saver.min.js",
        "https://cdn.jsdelivr.net/npm/file-saver@2.0.5/dist/FileSaver.min.js",
    ),
    (
        "jszip.min.js",
        "https://cdn.jsdelivr.net/npm/jszip@3.10.1/dist/jszip.min.js",
    ),
    // Charts
    (
        "echarts.min.js",
        "https://cdn.jsdelivr.net/npm/echarts@5.4.3/dist/echarts.min.js",
    ),
    // Vue ecosystem
    (
        "vue.global.prod.js",
        "https://cdn.jsdelivr.net/npm/vue@3.4.15/dist/vue.global.prod.js",
    ),
    (
        "vue-router.global.prod.js",
        "https://cdn.jsdelivr.net/npm/vue-router@4.2.5/dist/vue-router.global.prod.js",
    ),
    (
        "pinia.iife.prod.js",
        "https://cdn.jsdelivr.net/npm/pinia@2.1.7/dist/pinia.iife.prod.js",
    ),
    // PrimeVue component suite
    (
        "primevue/primevue.min.js",
        "https://cdn.jsdelivr.net/npm/primevue@3.48.1/umd/primevue.min.js",
    ),
    (
        "primevue/core/core.min.css",
        "https://cdn.jsdelivr.net/npm/primevue@3.48.1/resources/primevue.min.css",
    ),
    (
        "primevue/themes/lara-light-blue/theme.css",
        "https://cdn.jsdelivr.net/npm/primevue@3.48.1/resources/themes/lara-light-blue/theme.css",
    ),
    (
        "primeicons/primeicons.css",
        "https://cdn.jsdelivr.net/npm/primeicons@6.0.1/primeicons.css",
    ),
    (
        "primeicons/fonts/primeicons.woff2",
        "https://cdn.jsdelivr.net/npm/primeicons@6.0.1/fonts/primeicons.woff2",
    ),
    (
        "primeicons/fonts/primeicons.woff",
        "https://cdn.jsdelivr.net/npm/primeicons@6.0.1/fonts/primeicons.woff",
    ),
    (
        "primeicons/fonts/primeicons.ttf",
        "https://cdn.jsdelivr.net/npm/primeicons@6.0.1/fonts/primeicons.ttf",
    ),
];
